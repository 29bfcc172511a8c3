// ============================================================
// Layer 1 — Question Page
// ============================================================
// Renders the single HTML page. The answer keeps its line
// breaks by living in a <pre> block.
//
// Everything interpolated into the page (the question the user
// typed, the answer built from dataset fields, form errors) goes
// through `escape` first.

/// What the page shows on this render.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    /// Question to pre-fill the input with
    pub question: &'a str,

    /// Validation error for the question field
    pub error: Option<String>,

    pub answer: Option<String>,
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c    => out.push(c),
        }
    }
    out
}

pub fn render(view: &PageView<'_>) -> String {
    let error = view
        .error
        .as_deref()
        .map(|e| format!("<ul class=\"errorlist\"><li>{}</li></ul>\n", escape(e)))
        .unwrap_or_default();

    let answer = view
        .answer
        .as_deref()
        .map(|a| format!("<h2>Answer</h2>\n<pre class=\"answer\">{}</pre>\n", escape(a)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Student Q&amp;A</title>\n\
         </head>\n\
         <body>\n\
         <h1>Ask about a student</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         {error}\
         <label for=\"id_question\">Question:</label>\n\
         <input type=\"text\" name=\"question\" id=\"id_question\" value=\"{question}\" required>\n\
         <button type=\"submit\">Ask</button>\n\
         </form>\n\
         {answer}\
         </body>\n\
         </html>\n",
        question = escape(view.question),
    )
}
