pub const HOME_STYLES: &str = r#"
/* Page Styles */

/* General Layout */
.page {
  min-height: 100vh;
  background-color: var(--background);
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.narrow {
  max-width: var(--content-width);
  margin: 0 auto;
}

.page-intro {
  text-align: center;
  padding: var(--space-12) 0;
}

.page-title {
  font-family: Georgia, 'Times New Roman', serif;
  font-size: 2.5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin: var(--space-4) 0;
}

.page-lead {
  max-width: 42rem;
  margin: 0 auto;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

/* Religion cards */
.religion-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: var(--space-8);
  padding-bottom: var(--space-12);
}

.religion-card {
  display: flex;
  flex-direction: column;
  height: 100%;
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  color: var(--text-inverse);
  cursor: pointer;
  transition: transform var(--transition-normal) var(--easing-spring),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.religion-card:hover {
  transform: scale(1.03);
  box-shadow: var(--shadow-lg);
}

.religion-card:active {
  transform: scale(0.98);
}

.religion-card:focus-visible {
  outline: 4px solid rgba(255, 255, 255, 0.5);
  outline-offset: 2px;
}

.religion-card h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.religion-card .followers {
  font-size: 0.875rem;
  opacity: 0.9;
  margin-bottom: var(--space-4);
}

.religion-card .dogma {
  flex-grow: 1;
  margin-bottom: var(--space-4);
}

.religion-card .more {
  font-size: 0.875rem;
  font-weight: 500;
}

.religion-card .more span {
  display: inline-block;
  margin-left: var(--space-1);
  transition: transform var(--transition-fast) var(--easing-standard);
}

.religion-card:hover .more span {
  transform: translateX(5px);
}

.accent-indigo { background-color: var(--indigo); }
.accent-emerald { background-color: var(--emerald); }

/* About page */
.about-hero {
  padding: var(--space-16) 0 var(--space-12);
  background: linear-gradient(to bottom, rgba(79, 70, 229, 0.1), transparent);
}

.about-section {
  margin-bottom: var(--space-16);
}

.section-heading {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.section-heading .icon {
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  background-color: var(--primary-soft);
  color: var(--primary);
  font-size: 1.25rem;
}

.section-heading h2 {
  font-family: Georgia, 'Times New Roman', serif;
  font-size: 1.875rem;
  font-weight: 700;
}

.prose p,
.prose li {
  font-size: 1.125rem;
  line-height: 1.75;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.prose ul {
  padding-left: var(--space-6);
}

.about-cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: var(--space-8);
}

.about-card-header {
  padding: var(--space-4);
  color: var(--text-inverse);
  font-size: 1.25rem;
  font-weight: 700;
}

.about-card-body {
  padding: var(--space-5);
  color: var(--text-secondary);
}

.about-card-body ul {
  list-style: none;
  margin-top: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.about-card-body li::before {
  content: "•";
  margin-right: var(--space-2);
  color: var(--primary);
}

/* Timeline */
.timeline {
  padding: var(--space-12) 0 var(--space-16);
}

.timeline-blocks {
  display: flex;
  flex-direction: column;
  gap: var(--space-12);
}

.timeline-block {
  position: relative;
}

.timeline-dot {
  position: absolute;
  left: 50%;
  top: -8px;
  width: 16px;
  height: 16px;
  transform: translateX(-50%);
  border-radius: var(--radius-full);
  background-color: var(--primary);
  box-shadow: var(--shadow-sm);
  z-index: 1;
}

.timeline-block-title {
  padding: var(--space-3) var(--space-6);
  background-color: var(--primary-soft);
  border-bottom: 1px solid var(--border);
  color: var(--primary-dark);
  font-size: 1.125rem;
  font-weight: 700;
  overflow-wrap: anywhere;
}

[data-theme="dark"] .timeline-block-title {
  color: var(--primary-light);
}

.timeline-events {
  padding: var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.timeline-event {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2) var(--space-4);
}

.timeline-date {
  flex: 0 0 8rem;
  font-weight: 500;
  color: var(--primary);
}

.timeline-text {
  flex: 1 1 20rem;
}

.timeline-text p {
  margin-bottom: var(--space-2);
  color: var(--text-secondary);
}

.timeline-text p.headline {
  font-weight: 500;
  color: var(--text-primary);
}

@media (max-width: 640px) {
  .page-title { font-size: 2rem; }
  .timeline-date { flex-basis: 100%; }
}
"#;
