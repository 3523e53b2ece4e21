//! Syntax highlighting for text circuit diagrams
//!
//! Wraps a plain-text diagram in ANSI color tags: qubit-name labels get one
//! color, known gate symbols get theirs, wires stay untouched. This is
//! independent of the geometric portraits; it exists so a terminal prints a
//! circuit the way a notebook prints syntax-highlighted code.

use std::collections::HashMap;

const RESET: &str = "\x1b[0m";

/// Configuration for diagram highlighting
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// ANSI sequence for qubit-name labels
    pub label_color: String,
    /// ANSI sequence per gate token; parametric tokens fall back to their
    /// base name before `^` or `(`
    pub gate_colors: HashMap<String, String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        let mut gate_colors = HashMap::new();
        let cyan = "\x1b[36m";
        let yellow = "\x1b[33m";
        let green = "\x1b[32m";
        let magenta = "\x1b[35m";
        let blue = "\x1b[34m";
        let red = "\x1b[31m";

        for (token, color) in [
            ("H", yellow),
            ("X", green),
            ("⊕", green),
            ("Y", green),
            ("Z", magenta),
            ("S", magenta),
            ("T", magenta),
            ("●", blue),
            ("@", blue),
            ("M", red),
        ] {
            gate_colors.insert(token.to_string(), color.to_string());
        }

        Self {
            label_color: cyan.to_string(),
            gate_colors,
        }
    }
}

impl HighlightConfig {
    fn color_for_token(&self, token: &str) -> Option<&str> {
        if let Some(color) = self.gate_colors.get(token) {
            return Some(color);
        }
        // X^0.3 and friends inherit the base gate's color
        let base_end = token.find(|c| c == '^' || c == '(').unwrap_or(token.len());
        self.gate_colors.get(&token[..base_end]).map(|s| s.as_str())
    }
}

/// Highlight a text diagram with default colors
pub fn highlight(diagram: &str) -> String {
    highlight_with_config(diagram, &HighlightConfig::default())
}

/// Highlight a text diagram
pub fn highlight_with_config(diagram: &str, config: &HighlightConfig) -> String {
    diagram
        .split('\n')
        .map(|line| highlight_line(line, config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent every line of a block of text
///
/// Companion for printing a highlighted diagram inside surrounding prose.
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight_line(line: &str, config: &HighlightConfig) -> String {
    let (label, rest) = split_label(line);

    let mut out = String::with_capacity(line.len() + 16);
    if !label.is_empty() {
        out.push_str(&config.label_color);
        out.push_str(label);
        out.push_str(RESET);
    }

    let mut token = String::new();
    for c in rest.chars() {
        if is_wire_char(c) {
            flush_token(&mut out, &mut token, config);
            out.push(c);
        } else {
            token.push(c);
        }
    }
    flush_token(&mut out, &mut token, config);
    out
}

/// Split a qubit line into its `name: ` prefix and the wire part
///
/// Spacer lines (no wire after a colon) have no label.
fn split_label(line: &str) -> (&str, &str) {
    if let Some(idx) = line.find(": ") {
        let split = idx + 2;
        let rest = &line[split..];
        if rest.chars().any(|c| c == '─' || c == '-') {
            return (&line[..split], rest);
        }
    }
    ("", line)
}

fn flush_token(out: &mut String, token: &mut String, config: &HighlightConfig) {
    if token.is_empty() {
        return;
    }
    match config.color_for_token(token) {
        Some(color) => {
            out.push_str(color);
            out.push_str(token);
            out.push_str(RESET);
        },
        None => out.push_str(token),
    }
    token.clear();
}

fn is_wire_char(c: char) -> bool {
    matches!(c, '─' | '-' | '│' | '|' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_gets_colored() {
        let out = highlight("q0: ─────H─────");
        assert!(out.starts_with("\x1b[36mq0: \x1b[0m"));
    }

    #[test]
    fn test_gate_symbols_get_colored() {
        let out = highlight("q0: ─────H─────●─────");
        assert!(out.contains("\x1b[33mH\x1b[0m"));
        assert!(out.contains("\x1b[34m●\x1b[0m"));
    }

    #[test]
    fn test_wires_stay_plain() {
        let out = highlight("q0: ──────────");
        // Only the label is wrapped; wires carry no escape codes
        let after_label = out.split(RESET).nth(1).unwrap();
        assert!(!after_label.contains('\x1b'));
    }

    #[test]
    fn test_parametric_token_inherits_base_color() {
        let out = highlight("q2: ─────X^0.3─────");
        assert!(out.contains("\x1b[32mX^0.3\x1b[0m"));
    }

    #[test]
    fn test_unknown_token_unchanged() {
        let out = highlight("q0: ─────Q─────");
        assert!(out.contains("─Q─"));
    }

    #[test]
    fn test_spacer_lines_untouched() {
        let spacer = "           │";
        assert_eq!(highlight(spacer), spacer);
    }

    #[test]
    fn test_named_qubit_label() {
        let out = highlight("photon A: ─────H─────");
        assert!(out.starts_with("\x1b[36mphoton A: \x1b[0m"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 4), "    a\n    b");
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b");
    }

    #[test]
    fn test_multiline_roundtrip_structure() {
        let diagram = "q0: ───H───\n\nq1: ───X───";
        let out = highlight(diagram);
        assert_eq!(out.split('\n').count(), 3);
    }
}
