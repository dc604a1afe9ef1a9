use hackrx_client::{FormError, FormInput, QuestionAnswer};

pub const PAGE_TITLE: &str = "RAG Chat";
pub const HEADING: &str = "Insurance DocAI: Your Insurance Policy Expert";
const QUESTIONS_PLACEHOLDER: &str =
    "What is the policy effective date?\nWhat does Section 5 say about exclusions?";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
label { display: block; margin: 1rem 0 0.3rem; font-size: 0.9rem; }
input, textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; font: inherit; border: 1px solid #ccc; border-radius: 0.4rem; }
textarea { min-height: 7rem; }
button { width: 100%; margin-top: 1rem; padding: 0.6rem; font: inherit; color: #fff; background: #ff4b4b; border: none; border-radius: 0.4rem; cursor: pointer; }
button:disabled { opacity: 0.6; cursor: wait; }
.error { margin-top: 1rem; padding: 0.8rem 1rem; color: #7d353b; background: #ffe9e9; border-radius: 0.4rem; white-space: pre-wrap; }
.pair p { white-space: pre-wrap; }
"#;

// Disables the button while the backend call is in flight.
const SUBMIT_SCRIPT: &str = r#"document.getElementById('ask').addEventListener('submit', function () {
  var button = this.querySelector('button');
  button.disabled = true;
  button.textContent = 'Contacting backend...';
});"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("&#10;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the whole page. `outcome` is `None` before the first submission.
pub fn render_page(input: &FormInput, outcome: Option<&Result<Vec<QuestionAnswer>, FormError>>) -> String {
    let results = match outcome {
        None => String::new(),
        Some(Ok(pairs)) => render_pairs(pairs),
        Some(Err(e)) => format!(r#"<div class="error" role="alert">{}</div>"#, escape_html(&e.to_string())),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🤖</text></svg>">
<style>{style}</style>
</head>
<body>
<h1>{heading}</h1>
<form id="ask" method="post" action="/">
<label for="url">Document URL (publicly accessible)</label>
<input id="url" name="url" type="text" value="{url}">
<label for="questions">Questions (one per line)</label>
<textarea id="questions" name="questions" placeholder="{placeholder}">{questions}</textarea>
<button type="submit">Get Answers</button>
</form>
<section id="results">{results}</section>
<script>{script}</script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        heading = HEADING,
        url = escape_html(&input.url),
        placeholder = escape_html(QUESTIONS_PLACEHOLDER),
        questions = escape_html(&input.questions),
        results = results,
        script = SUBMIT_SCRIPT,
    )
}

fn render_pairs(pairs: &[QuestionAnswer]) -> String {
    pairs
        .iter()
        .map(|pair| {
            format!(
                "<div class=\"pair\">\n<p><strong>❓ Question:</strong> {}</p>\n<p><strong>💡 Answer:</strong> {}</p>\n</div>\n",
                escape_html(&pair.question),
                escape_html(&pair.answer)
            )
        })
        .collect()
}
