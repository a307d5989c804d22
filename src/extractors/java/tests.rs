use crate::extractors::factory::extract_outline;
use tree_sitter::Parser;

fn outline(code: &str) -> String {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .unwrap();
    let tree = parser.parse(code, None).unwrap();
    extract_outline(code.as_bytes(), &tree, "java").unwrap()
}

#[test]
fn test_class_members_and_modifiers() {
    let code = r#"package com.example.demo;

import java.util.List;
import java.io.IOException;

/**
 * Demo holds a name.
 */
public class Demo extends BaseService implements Runnable {
    private static final String DEFAULT_ROLE = "user";
    private String name;

    public Demo(String name, int age) {
        this.name = name;
    }

    @Override
    public String getName() {
        return name;
    }

    public void load(String path) throws IOException {
        read(path);
    }
}
"#;
    let output = outline(code);

    assert!(output.contains("package com.example.demo; // line 1"));
    assert!(output.contains("import java.util.List; // line 3"));
    assert!(output.contains("/**\n* Demo holds a name.\n*/\npublic class Demo extends BaseService implements Runnable { // line 9"));
    assert!(output.contains("\tprivate static final String DEFAULT_ROLE = \"user\"; // line 10"));
    assert!(output.contains("\tprivate String name; // line 11"));
    assert!(output.contains("\tpublic Demo(String name, int age) { //... } // line 13"));
    assert!(output.contains("\t@Override public String getName() { //... } // line 17"));
    assert!(output.contains("\tpublic void load(String path) throws IOException { //... } // line 22"));
    assert!(!output.contains("this.name = name"));
}

#[test]
fn test_interfaces_and_abstract_methods() {
    let code = r#"public interface UserRepository extends BaseRepository<User> {
    int MAX = 10;

    User findByEmail(String email);

    default boolean exists(String email) {
        return findByEmail(email) != null;
    }
}

abstract class Animal {
    public abstract void makeSound();
}
"#;
    let output = outline(code);

    assert!(output.contains("public interface UserRepository extends BaseRepository<User> { // line 1"));
    assert!(output.contains("\tint MAX = 10; // line 2"));
    assert!(output.contains("\tUser findByEmail(String email); // line 4"));
    assert!(output.contains("\tdefault boolean exists(String email) { //... } // line 6"));
    assert!(output.contains("abstract class Animal { // line 11"));
    assert!(output.contains("\tpublic abstract void makeSound(); // line 12"));
}

#[test]
fn test_enums_with_constants_and_body() {
    let code = r#"public enum Status {
    ACTIVE("a"),
    INACTIVE("i");

    private final String code;

    Status(String code) {
        this.code = code;
    }
}
"#;
    let output = outline(code);

    assert!(output.contains("public enum Status { // line 1"));
    assert!(output.contains("\tACTIVE(\"a\"), // line 2"));
    assert!(output.contains("\tINACTIVE(\"i\"), // line 3"));
    assert!(output.contains("\tprivate final String code; // line 5"));
    assert!(output.contains("\tStatus(String code) { //... } // line 7"));
}

#[test]
fn test_nested_classes_and_records() {
    let code = r#"public class Outer {
    private static class Validator {
        boolean check(String s) { return true; }
    }

    public record Point(int x, int y) {}
}
"#;
    let output = outline(code);

    assert!(output.contains("\tprivate static class Validator { // line 2"));
    assert!(output.contains("\t\tboolean check(String s) { //... } // line 3"));
    assert!(output.contains("\tpublic record Point(int x, int y) { // line 6"));
}

#[test]
fn test_explicit_private_members_are_still_rendered() {
    let code = "class A {\n    private void secret() {}\n}\n";
    let output = outline(code);

    assert!(output.contains("private void secret()"));
}
