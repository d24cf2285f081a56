//! Purpose: Pretty-print CLI JSON output with optional ANSI colour.
//! Exports: colorize_json.
//! Role: Pure formatter behind `emit_json`; selector output is mostly strings and arrays.
//! Invariants: With colour off, output equals serde_json::to_string_pretty.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use serde_json::{Map, Value};

const INDENT: &str = "  ";

const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_SCALAR: &str = "33";
const COLOR_PUNCT: &str = "39";

pub fn colorize_json(value: &Value, use_color: bool) -> String {
    let mut painter = Painter {
        use_color,
        out: String::new(),
    };
    painter.value(value, 0);
    painter.out
}

struct Painter {
    use_color: bool,
    out: String,
}

impl Painter {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::String(text) => self.quoted(text, COLOR_STRING),
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) => self.object(map, depth),
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                self.paint(&value.to_string(), COLOR_SCALAR)
            }
        }
    }

    fn array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.paint("[]", COLOR_PUNCT);
            return;
        }
        self.paint("[", COLOR_PUNCT);
        for (idx, item) in items.iter().enumerate() {
            self.newline(depth + 1);
            self.value(item, depth + 1);
            if idx + 1 < items.len() {
                self.paint(",", COLOR_PUNCT);
            }
        }
        self.newline(depth);
        self.paint("]", COLOR_PUNCT);
    }

    fn object(&mut self, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            self.paint("{}", COLOR_PUNCT);
            return;
        }
        self.paint("{", COLOR_PUNCT);
        for (idx, (key, value)) in map.iter().enumerate() {
            self.newline(depth + 1);
            self.quoted(key, COLOR_KEY);
            self.paint(":", COLOR_PUNCT);
            self.out.push(' ');
            self.value(value, depth + 1);
            if idx + 1 < map.len() {
                self.paint(",", COLOR_PUNCT);
            }
        }
        self.newline(depth);
        self.paint("}", COLOR_PUNCT);
    }

    fn quoted(&mut self, text: &str, color: &str) {
        let encoded = Value::String(text.to_string()).to_string();
        self.paint(&encoded, color);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    fn paint(&mut self, text: &str, color: &str) {
        if !self.use_color {
            self.out.push_str(text);
            return;
        }
        self.out.push_str("\u{1b}[");
        self.out.push_str(color);
        self.out.push('m');
        self.out.push_str(text);
        self.out.push_str("\u{1b}[0m");
    }
}
