pub const OVERLAY_STYLES: &str = r#"
/* Overlay dialogs: backdrop plus a panel that is either a side drawer or centered */
.overlay-backdrop {
  position: fixed;
  inset: 0;
  background-color: var(--backdrop);
  backdrop-filter: blur(4px);
  z-index: 40;
  animation: fade-in var(--transition-normal) var(--easing-standard) both;
}

.overlay-panel {
  position: fixed;
  z-index: 50;
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  color: var(--text-primary);
  box-shadow: var(--shadow-lg);
  overflow-y: auto;
}

.overlay-panel.placement-right {
  top: 0;
  bottom: 0;
  right: 0;
  width: 100%;
  max-width: 28rem;
  animation: slide-from-right 400ms var(--easing-spring) both;
}

.overlay-panel.placement-left {
  top: 0;
  bottom: 0;
  left: 0;
  width: 80%;
  max-width: 24rem;
  border-right: 1px solid var(--border);
  animation: slide-from-left 400ms var(--easing-spring) both;
}

.overlay-panel.placement-center {
  top: 50%;
  left: 50%;
  width: calc(100% - 2rem);
  max-width: 56rem;
  max-height: 90vh;
  border-radius: var(--radius-xl);
  border: 1px solid var(--border);
  animation: pop-in 400ms var(--easing-spring) both;
}

.overlay-header {
  position: relative;
  overflow: hidden;
  padding: var(--space-5) var(--space-6);
  color: var(--text-inverse);
  background-color: var(--primary-dark);
}

.overlay-header.plain {
  color: var(--text-primary);
  background-color: transparent;
  border-bottom: 1px solid var(--border);
}

.overlay-header-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.overlay-title {
  font-family: Georgia, 'Times New Roman', serif;
  font-size: 1.75rem;
  font-weight: 700;
}

.overlay-subtitle {
  margin-top: var(--space-2);
  opacity: 0.9;
  font-weight: 500;
}

.overlay-body {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  padding: var(--space-5) var(--space-6);
}

.overlay-section h3 {
  font-family: Georgia, 'Times New Roman', serif;
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-3);
}

.overlay-section .panel {
  background-color: var(--surface-muted);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-3);
}

.overlay-section ul {
  padding-left: var(--space-5);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.figure {
  background-color: var(--surface-muted);
  border-left: 4px solid var(--primary-light);
  border-radius: var(--radius-lg);
  padding: var(--space-3);
  margin-bottom: var(--space-3);
}

.figure-role {
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--text-tertiary);
  margin-bottom: var(--space-1);
}

.figure-audio {
  margin-top: var(--space-3);
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  background-color: var(--primary-soft);
}

.figure-audio audio {
  width: 100%;
  margin: var(--space-2) 0;
}

.radical-wing {
  background-color: var(--warning-bg);
  border: 1px solid var(--warning-border);
  border-radius: var(--radius-lg);
  padding: var(--space-3);
}

.radical-wing .warning {
  color: var(--warning-text);
  font-size: 0.875rem;
  font-weight: 500;
  margin-bottom: var(--space-2);
}

.radical-wing p {
  font-size: 0.875rem;
  line-height: 1.6;
}
"#;
