//! Button presentation as plain data.
//!
//! The host inserts `markup` into the object's element and `styles` into a
//! `<style>` tag keyed by the object id. Nothing here touches a document.

use crate::config::WidgetConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub markup: String,
    pub styles: String,
}

/// Builds the button markup and the stylesheet that hides the host's
/// object chrome around it.
pub fn render(config: &WidgetConfig, object_id: &str) -> Rendered {
    let id = escape_html(object_id);
    let markup = format!(
        r#"<button id="{id}-btn" style="{style}">{label}</button>"#,
        style = escape_html(config.button_css()),
        label = escape_html(config.button_label()),
    );

    let styles = [
        format!(r#"div[tid="{id}"] .qv-object-{id},"#),
        format!(r#"div[tid="{id}"] .qv-inner-object:not(.visual-cue) {{"#),
        "  border: none!important;".to_string(),
        "  background: none!important;".to_string(),
        "  margin: 0!important;".to_string(),
        "  padding: 0!important;".to_string(),
        "}".to_string(),
        format!("#{id}_title {{"),
        "  display: none!important;".to_string(),
        "}".to_string(),
    ]
    .join("\n");

    Rendered { markup, styles }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use memolink_schema::ActionType;

    #[test]
    fn label_is_escaped_and_falls_back_to_action() {
        let config = WidgetConfig {
            button_text: r#"<b>"Memo" & more</b>"#.to_string(),
            custom_css: "color: red;".to_string(),
            ..WidgetConfig::default()
        };
        let rendered = render(&config, "obj1");
        assert_eq!(
            rendered.markup,
            r#"<button id="obj1-btn" style="color: red;">&lt;b&gt;&quot;Memo&quot; &amp; more&lt;/b&gt;</button>"#
        );

        let fallback = WidgetConfig {
            action_type: ActionType::QCostUpdate,
            button_text: "  ".to_string(),
            ..WidgetConfig::default()
        };
        assert!(render(&fallback, "obj1").markup.ends_with(">qcost_update</button>"));
    }

    #[test]
    fn stylesheet_is_scoped_to_the_object() {
        let rendered = render(&WidgetConfig::default(), "aBc12");
        insta::assert_snapshot!(rendered.styles, @r#"
        div[tid="aBc12"] .qv-object-aBc12,
        div[tid="aBc12"] .qv-inner-object:not(.visual-cue) {
          border: none!important;
          background: none!important;
          margin: 0!important;
          padding: 0!important;
        }
        #aBc12_title {
          display: none!important;
        }
        "#);
    }
}
