use crate::extractors::factory::{extract_document, extract_outline};
use crate::extractors::base::{BodyKind, SymbolKind};
use tree_sitter::{Parser, Tree};

fn parse(code: &str) -> Tree {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .unwrap();
    parser.parse(code, None).unwrap()
}

fn outline(code: &str) -> String {
    let tree = parse(code);
    extract_outline(code.as_bytes(), &tree, "go").unwrap()
}

#[test]
fn test_doc_comment_directly_precedes_function() {
    let code = r#"package main

// Greet returns a greeting
func Greet(name string) string {
	return "Hello, " + name
}
"#;
    let output = outline(code);
    let lines: Vec<&str> = output.lines().collect();
    let doc_index = lines
        .iter()
        .position(|l| l.starts_with("// Greet returns a greeting"))
        .expect("doc line present");

    assert!(lines[doc_index + 1].contains("func Greet(name string) string"));
    assert!(lines[doc_index + 1].ends_with("// line 4"));
    assert!(!output.contains("Hello, "), "bodies are elided");
}

#[test]
fn test_package_imports_and_functions() {
    let code = r#"package main

import (
	"fmt"
	"strings"
)

func MyFunction(name string) string {
	return strings.ToUpper(name)
}

func (s *Server) Start(port int) error {
	fmt.Println(port)
	return nil
}
"#;
    let output = outline(code);

    assert!(output.contains("package main // line 1"));
    assert!(output.contains("import ("));
    assert!(output.contains("\"fmt\""));
    assert!(output.contains("func MyFunction(name string) string { //... } // line 8"));
    assert!(output.contains("func (s *Server) Start(port int) error { //... } // line 12"));
    assert!(!output.contains("ToUpper"));
}

#[test]
fn test_struct_fields_and_interface_methods() {
    let code = r#"package shapes

// Point is a coordinate
type Point struct {
	X, Y int
	Label string `json:"label"`
	fmt.Stringer
}

type Shape interface {
	Area() float64
	Perimeter() float64
}

type Celsius float64

type Alias = Point
"#;
    let output = outline(code);

    assert!(output.contains("// Point is a coordinate\ntype Point struct { // line 4"));
    assert!(output.contains("\tX, Y int // line 5"));
    assert!(output.contains("\tLabel string `json:\"label\"` // line 6"));
    assert!(output.contains("\tfmt.Stringer // line 7"));
    assert!(output.contains("type Shape interface { // line 10"));
    assert!(output.contains("\tArea() float64 // line 11"));
    assert!(output.contains("\tPerimeter() float64 // line 12"));
    assert!(output.contains("type Celsius float64 // line 15"));
    assert!(output.contains("type Alias = Point // line 17"));
}

#[test]
fn test_grouped_constants_render_one_line_per_spec() {
    let code = r#"package config

const (
	// MaxSize bounds buffers
	MaxSize int = 100
	Name = "svc"
)

var handler = func() {
	run()
}
"#;
    let output = outline(code);

    assert!(output.contains("// MaxSize bounds buffers\nconst MaxSize int = 100 // line 5"));
    assert!(output.contains("const Name = \"svc\" // line 6"));
    assert!(output.contains("var handler // line 9"));
    assert!(!output.contains("run()"));
}

#[test]
fn test_group_documentation_leads_first_spec() {
    let code = r#"package main

// Limits for the pool
const (
	Min = 1
	// Max caps workers
	Max = 2
)

// Shapes
type (
	Side int
	Edge = Side
)
"#;
    let output = outline(code);

    assert!(output.contains("// Limits for the pool\nconst Min = 1 // line 5"), "{output}");
    assert!(output.contains("// Max caps workers\nconst Max = 2 // line 7"), "{output}");
    assert!(output.contains("// Shapes\ntype Side int // line 12"), "{output}");
    assert_eq!(output.matches("// Limits for the pool").count(), 1);

    let tree = parse(code);
    let document = extract_document(code.as_bytes(), &tree, "go").unwrap();
    let max = document.symbols.iter().find(|s| s.name == "Max").unwrap();
    assert_eq!(max.doc_comment.as_deref(), Some("// Max caps workers"));
}

#[test]
fn test_symbol_forest_shape() {
    let code = r#"package zoo

type Animal struct {
	Name string
	Legs int
}

func (a Animal) Speak() {}
"#;
    let tree = parse(code);
    let document = extract_document(code.as_bytes(), &tree, "go").unwrap();
    let kinds: Vec<SymbolKind> = document.symbols.iter().map(|s| s.kind).collect();

    assert_eq!(
        kinds,
        vec![SymbolKind::Package, SymbolKind::Struct, SymbolKind::Method]
    );
    let animal = &document.symbols[1];
    assert_eq!(animal.name, "Animal");
    assert_eq!(animal.body, BodyKind::Members);
    let fields: Vec<&str> = animal.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(fields, vec!["Name", "Legs"]);
    assert_eq!(document.symbols[2].start_line, 8);
}

#[test]
fn test_dangling_brace_keeps_earlier_declarations() {
    let code = r#"package main

// Good is fine
func Good() int {
	return 1
}

type Config struct {
	Port int
}

func Broken() {
	if true {
"#;
    let output = outline(code);

    assert!(output.contains("func Good() int"));
    assert!(output.contains("type Config struct"));
    assert!(output.contains("Port int"));
}
