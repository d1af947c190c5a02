//! HTML rendering for the form page.
//!
//! One template, rendered with or without an outcome. Kept as plain string
//! assembly — there is a single page and no dynamic structure beyond the
//! answer block.

/// Static example questions shown under the form.
pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "What was the score of the last Bangladesh vs India cricket match?",
    "Latest news about xAI Colossus cluster",
    "Who won the 2025 Ballon d'Or?",
];

/// The outcome of one handled question, for re-rendering the page.
pub struct AskOutcome {
    pub question: String,
    pub answer: String,
}

/// Minimal HTML escaping for text interpolated into the page.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the form page, optionally with the outcome of the last question.
pub fn render(outcome: Option<&AskOutcome>) -> String {
    let question = outcome.map(|o| escape_html(&o.question)).unwrap_or_default();

    let answer_block = match outcome {
        Some(o) => format!(
            "<section class=\"answer\"><h2>Answer</h2><p>{}</p></section>",
            escape_html(&o.answer)
        ),
        None => String::new(),
    };

    let examples = EXAMPLE_QUESTIONS
        .iter()
        .map(|q| {
            format!(
                "<li><form method=\"post\" action=\"/ask\">\
                 <button type=\"submit\" name=\"question\" value=\"{q}\">{q}</button>\
                 </form></li>",
                q = escape_html(q)
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>scout - web research agent</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 44rem; margin: 2rem auto; padding: 0 1rem; }}
    textarea {{ width: 100%; min-height: 4rem; font: inherit; }}
    .answer {{ background: #f4f4f4; border-radius: 6px; padding: 1rem; white-space: pre-wrap; }}
    .examples button {{ background: none; border: none; color: #0366d6; cursor: pointer; padding: 0; font: inherit; text-align: left; }}
    .muted {{ color: #666; }}
  </style>
</head>
<body>
  <h1>scout</h1>
  <p class="muted">Ask anything - a single research agent answers, searching the web only when it needs to.</p>
  <form method="post" action="/ask">
    <textarea name="question" placeholder="e.g. What is the current status of Grok-3 development?">{question}</textarea>
    <p><button type="submit">Ask</button></p>
  </form>
  {answer_block}
  <section class="examples">
    <h2>Examples</h2>
    <ul>
      {examples}
    </ul>
  </section>
</body>
</html>
"#
    )
}
