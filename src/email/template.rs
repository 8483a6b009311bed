//! Branded email shell rendering
//!
//! Provides simple variable substitution for email templates. Variables are
//! specified using {{variable_name}} syntax. Substitution is verbatim: titles
//! and body fragments are NOT HTML-escaped, so every value interpolated into
//! a shell must come from a trusted caller.

use std::collections::HashMap;

/// Template rendering engine with variable substitution
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Render a template string, replacing {{variable}} with values
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        result
    }
}

/// Wrap a body fragment in the fixed branded shell.
///
/// Pure function: the output varies only with the arguments and the current
/// calendar year read at render time.
pub fn render_shell(app_name: &str, title: &str, body_html: &str) -> String {
    let mut engine = TemplateEngine::new();
    engine
        .set("app_name", app_name)
        .set("title", title)
        .set("body", body_html)
        .set("year", chrono::Utc::now().format("%Y").to_string());
    engine.render(SHELL)
}

const SHELL: &str = r#"<html>
  <body style="margin:0;padding:0;font-family:Arial,sans-serif;background:#ffffff;">
    <table width="100%" cellpadding="0" cellspacing="0" style="padding:20px 0;">
      <tr>
        <td align="center">
          <table width="600" style="border:1px solid #e0e0e0;border-radius:8px;">
            <tr>
              <td align="center" style="background:#1d4ed8;padding:20px;">
                <img src="https://cdn.arcadiamarkets.com/brand/logo.png" width="150" alt="{{app_name}}" />
              </td>
            </tr>
            <tr>
              <td style="padding:30px;color:#333333;">
                <h2 style="color:#1d4ed8;">{{title}}</h2>
                {{body}}
              </td>
            </tr>
            <tr>
              <td style="padding:20px;text-align:center;font-size:12px;color:#888888;background:#f7f7f7;">
                {{app_name}} Team<br/>
                &copy; {{year}} {{app_name}}
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>
"#;
