//! Credential-free fallback site generation.
//!
//! When no API key is configured for the selected provider, the build
//! request still succeeds: this module produces a fixed template site
//! with the user's prompt embedded (escaped) in the markup. It is also
//! run once at process startup so the served root is never empty.

use crate::assets::SiteAssets;

/// Escape the five HTML-significant characters in user-supplied text.
///
/// `&` is replaced first so later substitutions are not double-escaped.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a complete set of fallback assets for a prompt.
///
/// Pure and infallible: no I/O, no network, deterministic for a given
/// prompt. The script is self-contained client-side behavior (a
/// timestamp readout updated on a button click) so the script asset
/// demonstrably works without any AI call.
pub fn generate_fallback(prompt: &str) -> SiteAssets {
    let escaped = escape_html(prompt);

    let html = format!(
        r#"<header class="hero">
  <h1>Generated Site</h1>
  <p class="tagline">Built locally from your prompt &mdash; no API key configured.</p>
</header>
<main>
  <section class="card">
    <h2>Your prompt</h2>
    <blockquote id="prompt-text">{}</blockquote>
  </section>
  <section class="card">
    <h2>Live demo</h2>
    <p>This page ships with its own script. Try it:</p>
    <button id="timestamp-btn">Show current time</button>
    <p id="timestamp-output">&nbsp;</p>
  </section>
</main>
<footer>
  <p>Add a provider API key and rebuild to get an AI-generated site.</p>
</footer>"#,
        escaped
    );

    SiteAssets {
        html,
        css: FALLBACK_CSS.to_string(),
        js: FALLBACK_JS.to_string(),
    }
}

const FALLBACK_CSS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: #f7f7f8;
  color: #1a1a1a;
  line-height: 1.6;
}

.hero {
  background: #1f2937;
  color: #f9fafb;
  padding: 3rem 1.5rem;
  text-align: center;
}

.tagline {
  color: #9ca3af;
  margin-top: 0.5rem;
}

main {
  max-width: 720px;
  margin: 2rem auto;
  padding: 0 1.5rem;
}

.card {
  background: #ffffff;
  border: 1px solid #e5e7eb;
  border-radius: 0.5rem;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

blockquote {
  border-left: 4px solid #6366f1;
  padding-left: 1rem;
  color: #4b5563;
  margin-top: 0.75rem;
}

button {
  background: #6366f1;
  color: #ffffff;
  border: none;
  border-radius: 0.375rem;
  padding: 0.5rem 1.25rem;
  font-size: 1rem;
  cursor: pointer;
}

button:hover {
  background: #4f46e5;
}

#timestamp-output {
  margin-top: 0.75rem;
  font-family: ui-monospace, monospace;
  color: #374151;
}

footer {
  text-align: center;
  color: #6b7280;
  padding: 2rem 1.5rem;
}"#;

const FALLBACK_JS: &str = r#"(function () {
  'use strict';

  var button = document.getElementById('timestamp-btn');
  var output = document.getElementById('timestamp-output');

  if (button && output) {
    button.addEventListener('click', function () {
      output.textContent = 'It is now ' + new Date().toLocaleString();
    });
  }
})();"#;
