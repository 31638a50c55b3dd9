use constcat::concat;

mod components;
mod home;
mod overlay;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use overlay::OVERLAY_STYLES;
pub use variables::CSS_VARIABLES;

// site style bundling
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    OVERLAY_STYLES,
r#"
/* Application-specific styles */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.app-main {
  flex-grow: 1;
}

.app-header {
  background-color: var(--primary-dark);
  color: var(--text-inverse);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 30;
}

[data-theme="dark"] .app-header {
  background-color: var(--neutral-950);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  padding: 0 var(--space-4);
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: inherit;
  font-family: Georgia, 'Times New Roman', serif;
  font-weight: 700;
  font-size: 1.125rem;
}

.brand:hover {
  text-decoration: none;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-link {
  color: rgba(255, 255, 255, 0.8);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-inverse);
  background-color: rgba(255, 255, 255, 0.1);
  text-decoration: none;
}

.nav-link.active {
  color: var(--text-inverse);
  background-color: rgba(255, 255, 255, 0.15);
}

.theme-toggle {
  background-color: rgba(79, 70, 229, 0.2);
  color: var(--text-inverse);
  transition: transform var(--transition-slow) var(--easing-spring),
              background-color var(--transition-fast) var(--easing-standard);
}

.theme-toggle.dark {
  transform: rotate(180deg);
}

.menu-toggle {
  display: none;
  color: var(--text-inverse);
}

.mobile-nav {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.mobile-nav a {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-lg);
  color: var(--text-primary);
  font-weight: 500;
}

.mobile-nav a:hover {
  background-color: var(--neutral-100);
  text-decoration: none;
}

[data-theme="dark"] .mobile-nav a:hover {
  background-color: var(--neutral-800);
}

.mobile-footer {
  margin-top: auto;
  padding: var(--space-5) var(--space-6);
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

@media (max-width: 640px) {
  .nav-links .nav-link {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }
}

.divider {
  height: 4px;
  width: 100%;
  opacity: 0.8;
  background-color: var(--gold);
  background-image: var(--divider-gradient);
}

.app-footer {
  background-color: var(--neutral-800);
  color: var(--text-inverse);
  border-top: 1px solid var(--neutral-700);
  padding: var(--space-8) 0;
}

[data-theme="dark"] .app-footer {
  background-color: var(--neutral-950);
}

.footer-title {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-family: Georgia, 'Times New Roman', serif;
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.footer-summary {
  max-width: 28rem;
  font-size: 0.875rem;
  color: var(--neutral-300);
}

.footer-legal {
  margin-top: var(--space-8);
  padding-top: var(--space-6);
  border-top: 1px solid var(--neutral-700);
  text-align: center;
  font-size: 0.875rem;
  color: var(--neutral-400);
}

.error-panel {
  margin: var(--space-8) auto;
  max-width: 40rem;
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--warning-bg);
  color: var(--warning-text);
}
"#
);
