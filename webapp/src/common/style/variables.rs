pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #4F46E5;          /* Indigo used for links and accents */
  --primary-light: #818CF8;    /* Lighter indigo for hover states */
  --primary-dark: #3730A3;     /* Darker indigo for headers */
  --primary-soft: #EEF2FF;     /* Tinted backgrounds (badges, block titles) */
  --gold: #D4A017;             /* Legal-themed divider accent */
  --indigo: #4338CA;           /* Fraternidade accent */
  --emerald: #047857;          /* Circulo accent */

  /* Neutrals */
  --neutral-50: #FAFAFA;
  --neutral-100: #F5F5F5;
  --neutral-200: #E5E5E5;
  --neutral-300: #D4D4D4;
  --neutral-400: #A3A3A3;
  --neutral-500: #737373;
  --neutral-600: #525252;
  --neutral-700: #404040;
  --neutral-800: #262626;
  --neutral-900: #171717;
  --neutral-950: #0A0A0A;

  /* Semantic Colors */
  --warning-bg: #FEF2F2;
  --warning-border: #FEE2E2;
  --warning-text: #B91C1C;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-muted: var(--neutral-50);
  --backdrop: rgba(0, 0, 0, 0.6);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-focus: var(--primary);

  /* Decorative divider */
  --divider-gradient: linear-gradient(to right, rgba(79, 70, 229, 0.2), rgba(236, 72, 153, 0.2));

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;
  --content-width: 56rem;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
  /* approximates a damped spring (damping 25-30, stiffness 300) */
  --easing-spring: cubic-bezier(0.34, 1.3, 0.64, 1);
}

[data-theme="dark"] {
  --primary: #818CF8;
  --primary-light: #A5B4FC;
  --primary-soft: rgba(49, 46, 129, 0.4);

  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-muted: rgba(38, 38, 38, 0.5);
  --backdrop: rgba(0, 0, 0, 0.7);

  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);

  --warning-bg: rgba(127, 29, 29, 0.1);
  --warning-border: rgba(127, 29, 29, 0.2);
  --warning-text: #F87171;

  --divider-gradient: linear-gradient(to right, rgba(124, 58, 237, 0.5), rgba(236, 72, 153, 0.5));
}"#;
