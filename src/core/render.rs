//! Renderer module
//!
//! Renders a WordReport to different output formats: html, md, json, jsonl.
//! HTML is the default and follows the classic report layout: a title, a
//! heading naming the input, and a bordered Word/Count table in sorted order.

use crate::core::model::WordReport;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Markdown,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for word reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string.
    pub fn render(&self, report: &WordReport) -> String {
        match self.config.format {
            OutputFormat::Html => self.render_html(report),
            OutputFormat::Markdown => self.render_markdown(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
        }
    }

    /// Render the HTML document: header, one data row per word, footer.
    fn render_html(&self, report: &WordReport) -> String {
        let mut out = String::new();

        out.push_str("<html>\n");
        out.push_str("<head>\n");
        out.push_str("<title>Word Counter</title>\n");
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        out.push_str(&format!(
            "<h2>Words Counted in {}</h2>\n",
            escape_html(&report.source)
        ));
        out.push_str("    <hr>\n");
        out.push_str("    <table border=\"2\">\n");
        out.push_str("    <tr>\n");
        out.push_str("    <td>Word</td>\n");
        out.push_str("    <td>Count</td>\n");
        out.push_str("    </tr>\n");

        for row in &report.rows {
            out.push_str("        <tr>\n");
            out.push_str(&format!("        <td>{}</td>\n", escape_html(&row.word)));
            out.push_str(&format!("        <td>{}</td>\n", row.count));
            out.push_str("        </tr>\n");
        }

        out.push_str("    </table>\n");
        out.push_str("</body>\n");
        out.push_str("</html>\n");

        out
    }

    /// Render as a Markdown table.
    fn render_markdown(&self, report: &WordReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("# Words Counted in {}\n\n", report.source));
        out.push_str("| Word | Count |\n");
        out.push_str("|------|-------|\n");
        for row in &report.rows {
            out.push_str(&format!("| {} | {} |\n", row.word, row.count));
        }

        out
    }

    /// Render the whole report as one JSON document.
    fn render_json(&self, report: &WordReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Render one JSON object per row.
    fn render_jsonl(&self, report: &WordReport) -> String {
        report
            .rows
            .iter()
            .filter_map(|row| {
                if self.config.pretty {
                    serde_json::to_string_pretty(row).ok()
                } else {
                    serde_json::to_string(row).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }
}

/// Escape text for HTML element content. The separator set is configurable,
/// so words can contain markup-significant characters.
fn escape_html(s: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{WordCount, WordReport};

    fn report() -> WordReport {
        WordReport::new(
            "input.txt",
            vec![
                WordCount {
                    word: "a".to_string(),
                    count: 2,
                },
                WordCount {
                    word: "b".to_string(),
                    count: 1,
                },
            ],
        )
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!(
            "md".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "jsonl".parse::<OutputFormat>().unwrap(),
            OutputFormat::Jsonl
        );
    }

    #[test]
    fn test_output_format_parse_case_insensitive() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "invalid".parse::<OutputFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Html);
    }

    #[test]
    fn test_render_html_structure() {
        let renderer = Renderer::new(OutputFormat::Html);
        let output = renderer.render(&report());

        assert!(output.contains("<title>Word Counter</title>"));
        assert!(output.contains("<h2>Words Counted in input.txt</h2>"));
        assert!(output.contains("<table border=\"2\">"));
        assert!(output.contains("<td>Word</td>"));
        assert!(output.contains("<td>Count</td>"));
        assert!(output.contains("</body>"));
        assert!(output.contains("</html>"));
    }

    #[test]
    fn test_render_html_rows_in_order() {
        let renderer = Renderer::new(OutputFormat::Html);
        let output = renderer.render(&report());

        let a = output.find("<td>a</td>").expect("row for a");
        let b = output.find("<td>b</td>").expect("row for b");
        assert!(a < b, "rows must appear in sorted order");
        assert_eq!(output.matches("        <tr>").count(), 2);
        assert!(output.contains("<td>2</td>"));
        assert!(output.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_html_empty_report() {
        let renderer = Renderer::new(OutputFormat::Html);
        let output = renderer.render(&WordReport::new("empty.txt", Vec::new()));

        // Header row only, zero data rows.
        assert_eq!(output.matches("        <tr>").count(), 0);
        assert!(output.contains("<td>Word</td>"));
        assert!(output.contains("</table>"));
    }

    #[test]
    fn test_render_html_escapes_cells() {
        let renderer = Renderer::new(OutputFormat::Html);
        let report = WordReport::new(
            "<a&b>.txt",
            vec![WordCount {
                word: "x<y&z".to_string(),
                count: 1,
            }],
        );
        let output = renderer.render(&report);
        assert!(output.contains("&lt;a&amp;b&gt;.txt"));
        assert!(output.contains("<td>x&lt;y&amp;z</td>"));
        assert!(!output.contains("<td>x<y&z</td>"));
    }

    #[test]
    fn test_render_markdown() {
        let renderer = Renderer::new(OutputFormat::Markdown);
        let output = renderer.render(&report());

        assert!(output.contains("# Words Counted in input.txt"));
        assert!(output.contains("| Word | Count |"));
        assert!(output.contains("| a | 2 |"));
        assert!(output.contains("| b | 1 |"));
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&report());

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["source"], "input.txt");
        assert_eq!(value["rows"][0]["word"], "a");
        assert_eq!(value["rows"][0]["count"], 2);
        assert_eq!(value["meta"]["distinct_words"], 2);
    }

    #[test]
    fn test_render_json_pretty() {
        let config = RenderConfig::with_pretty(OutputFormat::Json, true);
        let renderer = Renderer::with_config(config);
        let output = renderer.render(&report());
        assert!(output.contains("  \"source\""));
    }

    #[test]
    fn test_render_jsonl_one_row_per_line() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&report());

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["word"], "a");
    }

    #[test]
    fn test_render_jsonl_empty() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&WordReport::new("empty.txt", Vec::new()));
        assert!(output.is_empty());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }
}
