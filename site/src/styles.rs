//! CSS styles for the landing page.
//!
//! To extend or override styles:
//!
//! ```rust
//! use smartbus_site::styles::SITE_CSS;
//!
//! let my_css = ".hero { padding: 48px 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```

/// Complete CSS for the page - light theme with blue gradients.
///
/// Written to `styles.css` when the page links an external stylesheet.
pub const SITE_CSS: &str = r#"
:root {
    --blue-50: #eff6ff;
    --blue-100: #dbeafe;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --blue-800: #1e40af;
    --green-500: #22c55e;
    --green-600: #16a34a;
    --purple-600: #9333ea;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 1280px;
    --radius: 16px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    line-height: 1.6;
    background: linear-gradient(135deg, var(--blue-50), #ffffff 50%, var(--blue-50));
}

img {
    max-width: 100%;
    display: block;
}

a {
    color: inherit;
    text-decoration: none;
}

/* Layout */
.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 16px;
}

.section-description {
    font-size: 1.25rem;
    color: var(--gray-600);
    max-width: 48rem;
    margin: 0 auto;
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(6px);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 16px;
    padding-bottom: 16px;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.brand-mark {
    width: 40px;
    height: 40px;
    border-radius: 10px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #ffffff;
    background: linear-gradient(90deg, var(--blue-600), var(--blue-700));
}

.brand-mark.small {
    width: 32px;
    height: 32px;
}

.brand-name {
    font-size: 1.5rem;
    font-weight: 700;
}

.site-nav {
    display: flex;
    gap: 32px;
}

.nav-link {
    color: var(--gray-600);
    transition: color 0.2s;
}

.nav-link:hover {
    color: var(--blue-600);
}

/* Hero */
.hero {
    padding: 128px 0;
}

.hero-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 48px;
    align-items: center;
}

.hero-title {
    font-size: 3.75rem;
    line-height: 1.1;
    margin: 0 0 16px;
}

.hero-title-accent {
    background: linear-gradient(90deg, var(--blue-600), var(--blue-800));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    font-size: 1.25rem;
    color: var(--gray-600);
    max-width: 42rem;
}

.hero-actions {
    display: flex;
    gap: 16px;
    margin: 32px 0;
}

.btn {
    display: inline-block;
    padding: 16px 32px;
    border-radius: 12px;
    font-weight: 600;
    font-size: 1.125rem;
    transition: all 0.2s;
}

.btn-primary {
    color: #ffffff;
    background: linear-gradient(90deg, var(--blue-600), var(--blue-700));
    box-shadow: 0 10px 15px rgba(37, 99, 235, 0.25);
}

.btn-primary:hover {
    transform: scale(1.05);
}

.btn-secondary {
    color: var(--blue-600);
    border: 2px solid var(--blue-600);
}

.btn-secondary:hover {
    color: #ffffff;
    background: var(--blue-600);
}

.hero-stats {
    display: flex;
    gap: 32px;
    padding-top: 16px;
}

.hero-stat {
    text-align: center;
}

.hero-stat-value {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--blue-600);
}

.hero-stat-label {
    color: var(--gray-600);
}

.hero-visual {
    position: relative;
}

.hero-image {
    width: 100%;
    height: 400px;
    object-fit: cover;
    border-radius: var(--radius);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.hero-live-badge {
    position: absolute;
    top: 16px;
    right: 16px;
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 12px 16px;
    border-radius: 12px;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--gray-700);
    background: rgba(255, 255, 255, 0.9);
}

.live-dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    background: var(--green-500);
    animation: pulse 2s infinite;
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

/* Features */
.features {
    padding: 80px 0;
    background: #ffffff;
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 32px;
}

.feature-card {
    text-align: center;
    padding: 24px;
    border-radius: var(--radius);
    border: 1px solid var(--gray-100);
    transition: all 0.3s;
}

.feature-card:hover {
    border-color: var(--blue-100);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.feature-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto;
    border-radius: var(--radius);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #ffffff;
}

.feature-title {
    font-size: 1.25rem;
    font-weight: 600;
}

.feature-description {
    color: var(--gray-600);
}

.accent-blue { background: var(--blue-600); }
.accent-green { background: var(--green-600); }
.accent-purple { background: var(--purple-600); }

/* Screenshots */
.screenshots {
    padding: 80px 0;
    background: var(--gray-50);
}

.showcase {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 48px;
    align-items: center;
    margin-bottom: 80px;
}

.showcase:last-child {
    margin-bottom: 0;
}

.showcase.reversed .showcase-copy {
    order: 2;
}

.showcase.reversed .showcase-visual {
    order: 1;
}

.showcase-heading {
    display: flex;
    align-items: center;
    gap: 12px;
}

.showcase-heading h3 {
    font-size: 1.5rem;
    margin: 0;
}

.showcase-icon {
    width: 32px;
    height: 32px;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #ffffff;
}

.showcase-description {
    font-size: 1.125rem;
    color: var(--gray-600);
}

.benefit-list {
    list-style: none;
    padding: 0;
    margin: 0;
}

.benefit {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 12px;
    color: var(--gray-700);
}

.benefit-check {
    color: var(--green-500);
}

.showcase-visual {
    position: relative;
}

.showcase-image {
    width: 100%;
    max-width: 28rem;
    margin: 0 auto;
    border-radius: var(--radius);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.showcase-badge {
    position: absolute;
    top: -16px;
    right: -16px;
    padding: 8px 16px;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 600;
    color: #ffffff;
}

.showcase.reversed .showcase-badge {
    right: auto;
    left: -16px;
}

/* Download */
.download {
    padding: 80px 0;
    text-align: center;
    color: #ffffff;
    background: linear-gradient(90deg, var(--blue-600), var(--blue-800));
}

.download .section-description {
    color: var(--blue-100);
    margin-bottom: 32px;
}

.download-grid {
    display: flex;
    flex-wrap: wrap;
    gap: 24px;
    justify-content: center;
}

.download-card {
    width: 100%;
    max-width: 24rem;
    padding: 32px;
    border-radius: var(--radius);
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: rgba(255, 255, 255, 0.1);
}

.download-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto;
    border-radius: var(--radius);
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 255, 255, 0.2);
}

.download-blurb {
    font-size: 0.875rem;
    color: var(--blue-100);
}

.download-action {
    padding: 16px;
    border-radius: 12px;
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: rgba(255, 255, 255, 0.1);
}

.download-status {
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.6);
    margin-bottom: 8px;
}

.download-btn {
    display: inline-block;
    width: 100%;
    padding: 8px 16px;
    border: none;
    border-radius: 8px;
    font: inherit;
    font-size: 0.875rem;
    color: #ffffff;
    background: rgba(255, 255, 255, 0.2);
}

.download-btn:disabled {
    cursor: not-allowed;
}

.download-link:hover {
    background: rgba(255, 255, 255, 0.3);
}

.download-release {
    padding-top: 32px;
    font-size: 0.875rem;
    color: var(--blue-100);
}

/* Footer */
.site-footer {
    padding: 48px 0;
    color: #ffffff;
    background: var(--gray-900);
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 32px;
}

.footer-blurb,
.footer-column ul {
    color: var(--gray-400);
}

.footer-column h4 {
    margin: 0 0 16px;
}

.footer-column ul {
    list-style: none;
    padding: 0;
    margin: 0;
}

.footer-column li {
    margin-bottom: 8px;
}

.footer-socials {
    display: flex;
    gap: 16px;
}

.social-icon {
    width: 40px;
    height: 40px;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--gray-800);
    transition: background 0.2s;
}

.social-icon:hover {
    background: var(--blue-600);
}

.footer-bottom {
    margin-top: 32px;
    padding-top: 32px;
    border-top: 1px solid var(--gray-800);
    text-align: center;
    color: var(--gray-400);
}

/* Responsive */
@media (max-width: 1024px) {
    .hero-grid,
    .showcase {
        grid-template-columns: minmax(0, 1fr);
    }

    .showcase.reversed .showcase-copy,
    .showcase.reversed .showcase-visual {
        order: 0;
    }

    .hero-title {
        font-size: 2.25rem;
    }
}

@media (max-width: 768px) {
    .site-nav {
        display: none;
    }

    .features-grid,
    .footer-grid {
        grid-template-columns: minmax(0, 1fr);
    }

    .hero-actions {
        flex-direction: column;
    }
}
"#;

/// Content Security Policy for the page: no scripts, remote images allowed.
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'none'; font-src 'self' data:;";
