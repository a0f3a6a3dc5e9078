//! Server-rendered HTML for the summarizer page.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use ts_inference::models::{truncate_input, MAX_INPUT_CHARS};

const PREVIEW_CHARS: usize = 300;

const TIPS: [&str; 4] = [
    "Paste articles, research papers, or long documents",
    "Optimal length: 500-3000 characters",
    "The AI works best with well-structured text",
    "Multiple paragraphs are handled automatically",
];

const TROUBLESHOOTING: [&str; 4] = [
    "Check your internet connection",
    "Try with shorter text (under 4000 characters)",
    "Wait a moment and try again",
    "Ensure your text contains meaningful content",
];

const STYLE: &str = "
body{font-family:sans-serif;max-width:1100px;margin:0 auto;padding:1rem}
textarea{width:100%}
.columns{display:flex;gap:1rem}.column{flex:1}
pre{white-space:pre-wrap}
.char-counter.normal{color:#2e7d32}.char-counter.warning{color:#ef6c00}.char-counter.danger{color:#c62828}
.error{color:#c62828}.warning{color:#ef6c00}.success{color:#2e7d32}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Danger,
}

impl CounterLevel {
    fn css_class(self) -> &'static str {
        match self {
            CounterLevel::Normal => "normal",
            CounterLevel::Warning => "warning",
            CounterLevel::Danger => "danger",
        }
    }
}

/// Length hint shown under the text box.
pub fn char_counter(count: usize) -> (CounterLevel, String) {
    match count {
        0 => (CounterLevel::Normal, "Start typing to see character count".to_string()),
        n if n < 3000 => (CounterLevel::Normal, format!("✅ {} characters - Perfect length", group_thousands(n))),
        n if n < 4000 => (
            CounterLevel::Warning,
            format!("⚠️ {} characters - Getting long, but still good", group_thousands(n)),
        ),
        n => (
            CounterLevel::Danger,
            format!(
                "🔴 {} characters - Very long! Will be truncated to ~{} chars",
                group_thousands(n),
                group_thousands(MAX_INPUT_CHARS)
            ),
        ),
    }
}

pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// First 300 characters, with an ellipsis when anything was cut.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// What sits below the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Empty,
    ConfigError(String),
    Warning(String),
    Failure(String),
    Summary { summary: String },
}

pub fn render(text: &str, panel: &Panel) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "AI Text Summarizer" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div.header {
                    h1 { "📝 AI-Powered Text Summarizer" }
                    p { "Transform lengthy articles into concise, meaningful summaries using advanced AI" }
                }
                @if let Panel::ConfigError(message) = panel {
                    div.error { "⚠️ Configuration Error: " (message) }
                } @else {
                    (input_form(text))
                    (panel_body(text, panel))
                }
                hr;
                footer { p { "🤖 Powered by Hugging Face AI" } }
            }
        }
    }
}

fn tip_list(heading: &str, items: &[&str]) -> Markup {
    html! {
        div.tips {
            strong { (heading) }
            ul {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}

fn input_form(text: &str) -> Markup {
    let (level, hint) = char_counter(text.chars().count());
    html! {
        form method="post" action="/summarize" {
            h3 { "📄 Input Text" }
            textarea name="text" rows="12" placeholder="Paste your article, research paper, or long document here..." { (text) }
            div class=(format!("char-counter {}", level.css_class())) { (hint) }
            button type="submit" { "🚀 Generate Summary" }
        }
    }
}

fn panel_body(text: &str, panel: &Panel) -> Markup {
    match panel {
        Panel::Empty if text.is_empty() => tip_list("💡 Tips for best results:", &TIPS),
        Panel::Empty | Panel::ConfigError(_) => html! {},
        Panel::Warning(message) => html! { div.warning { "📝 " (message) } },
        Panel::Failure(message) => html! {
            div.error { "❌ " strong { "Something went wrong:" } " " (message) }
            (tip_list("🔧 Troubleshooting tips:", &TROUBLESHOOTING))
        },
        Panel::Summary { summary } => summary_panel(text, summary),
    }
}

fn summary_panel(original: &str, summary: &str) -> Markup {
    let original_chars = original.chars().count();
    let summary_chars = summary.chars().count();
    let ratio = if original_chars == 0 {
        0.0
    } else {
        summary_chars as f64 / original_chars as f64 * 100.0
    };

    html! {
        div.results {
            div.success { "🎉 Summary Generated Successfully!" }
            @if truncate_input(original).truncated {
                div.warning { "Only the first " (group_thousands(MAX_INPUT_CHARS)) " characters were summarized." }
            }
            div.columns {
                div.column {
                    h3 { "📄 Original Text Preview" }
                    pre { (preview(original)) }
                    small { "Original: " (group_thousands(original_chars)) " characters" }
                }
                div.column {
                    h3 { "✨ AI Summary" }
                    pre { (summary) }
                    small { (format!("Summary: {} characters ({:.1}% of original)", group_thousands(summary_chars), ratio)) }
                }
            }
        }
    }
}
