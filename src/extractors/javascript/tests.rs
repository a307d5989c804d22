use crate::extractors::factory::{extract_document, extract_outline};
use crate::extractors::base::SymbolKind;
use tree_sitter::{Parser, Tree};

fn parse(code: &str) -> Tree {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .unwrap();
    parser.parse(code, None).unwrap()
}

fn outline(code: &str) -> String {
    let tree = parse(code);
    extract_outline(code.as_bytes(), &tree, "javascript").unwrap()
}

#[test]
fn test_functions_classes_and_requires() {
    let code = r#"const fs = require('fs');
import React, { Component } from 'react';

// Adds one
function myFunction(param) {
  return param + 1;
}

const arrowFunc = (x) => x * 2;

class MyClass extends Component {
  static create() {
    return new MyClass();
  }

  async render() {
    return null;
  }
}
"#;
    let output = outline(code);

    assert!(output.contains("const fs = require('fs'); // line 1"));
    assert!(output.contains("import React, { Component } from 'react'; // line 2"));
    assert!(output.contains("// Adds one\nfunction myFunction(param) { // line 5\n  // ...\n}\n"));
    assert!(output.contains("const arrowFunc = (x) => { // line 9"));
    assert!(output.contains("class MyClass extends Component { // line 11"));
    assert!(output.contains("  static create() { // line 12\n    // ...\n  }\n"));
    assert!(output.contains("  async render() { // line 16"));
    assert!(!output.contains("new MyClass"));
}

#[test]
fn test_exports_take_the_export_line_and_doc() {
    let code = r#"/** Entry */
export default class App extends React.Component {
  count = 0;
}

export function helper(a, b) {}

export const VERSION = "1.0";

export { helper as util };
export * from './models';
"#;
    let output = outline(code);

    assert!(output.contains("/** Entry */\nexport default class App extends React.Component { // line 2"));
    assert!(output.contains("  count; // line 3"));
    assert!(output.contains("export function helper(a, b) { // line 6"));
    assert!(output.contains("export const VERSION; // line 8"));
    assert!(output.contains("export { helper as util }; // line 10"));
    assert!(output.contains("export * from './models'; // line 11"));
}

#[test]
fn test_plain_constants_and_callbacks_stay_out() {
    let code = r#"const limit = 10;

app.get('/', (req, res) => {
  const inner = () => {};
  res.send(limit);
});

async function* stream() {}
"#;
    let tree = parse(code);
    let document = extract_document(code.as_bytes(), &tree, "javascript").unwrap();

    assert_eq!(document.symbols.len(), 1);
    assert_eq!(document.symbols[0].kind, SymbolKind::Function);
    assert_eq!(document.symbols[0].signature, "async function* stream()");
}

#[test]
fn test_object_literal_methods_stay_out() {
    let code = r#"new Vue({
  methods: {
    save() {
      persist();
    },
  },
});
app.use({ handler(req) { return req; } });
module.exports = {
  start() {},
};

class Store {
  load() {}
}
"#;
    let tree = parse(code);
    let document = extract_document(code.as_bytes(), &tree, "javascript").unwrap();

    assert_eq!(document.symbols.len(), 1);
    assert_eq!(document.symbols[0].name, "Store");
    assert_eq!(document.symbols[0].children.len(), 1);
    assert_eq!(document.symbols[0].children[0].name, "load");

    let output = document.render();
    assert!(!output.contains("save()"), "{output}");
    assert!(!output.contains("handler(req)"), "{output}");
    assert!(!output.contains("start()"), "{output}");
}

#[test]
fn test_function_expression_values() {
    let code = "var handler = function(event) { return event; };\n";
    let output = outline(code);

    assert!(output.contains("var handler = function(event) { // line 1"));
}
