//! Snapshot tests for whole-file Kotlin emission.
//!
//! These compose the emitters the way a generator does and pin the exact
//! produced text. Run `cargo insta review` to update snapshots when making
//! intentional formatting changes.

use ktgen::{Clazz, Const, Emit, KOTLIN_CONVENTIONS, Sink, Var, with};

#[test]
fn test_class_file() {
    let file = with(String::new(), |out| {
        out.packg("com.example.html");
        out.import("com.example.html.Unsafe");
        out.empty_line();
        let tag = Clazz::new("HTMLTag")
            .abstract_()
            .open()
            .constructor_var(Var::new("tagName", "String"))
            .supertype("Tag");
        out.clazz(&tag, |out| {
            out.variable(&Var::new("empty", "Boolean").overriding(), false, "");
            out.define_is("false");
            out.clazz(&Clazz::new("Companion").object().private(), |out| {
                out.function("of", &[Var::new("name", "String")], "HTMLTag", &[], "");
                out.empty_line();
            });
        });
    });

    insta::assert_snapshot!(file, @r#"
    package com.example.html
    import com.example.html.Unsafe

    public abstract open class HTMLTag(val tagName : String) : Tag {
    override val empty : Boolean = false
    object Companion {
    fun of(name : String) : HTMLTag
    }
    }
    "#);
}

#[test]
fn test_property_accessors() {
    let file = with(String::new(), |out| {
        out.clazz(&Clazz::new("Title").supertype("Tag"), |out| {
            out.variable(&Var::new("text", "String").mutable(), false, "");
            out.empty_line();
            out.getter().block_short(|out| {
                out.append("children.joinToString(\"\")");
            });
            out.setter(|out| {
                out.append("replaceChildren(newValue)");
            });
        });
    });

    insta::assert_snapshot!(file, @r#"
    public class Title : Tag {
    var text : String
        get() { children.joinToString("") }
        set(newValue) {replaceChildren(newValue)}
    }
    "#);
}

#[test]
fn test_delegated_property() {
    let file = with(String::new(), |out| {
        out.variable(&Var::new("attributes", "MutableMap<String, String>"), false, "");
        out.delegate_by("lazy { mutableMapOf<String, String>() }");
    });

    assert_eq!(
        file,
        "val attributes : MutableMap<String, String> by lazy { mutableMapOf<String, String>() }\n"
    );
}

#[test]
fn test_banner_precedes_declarations() {
    let file = with(String::new(), |out| {
        out.warning().empty_line();
        out.packg("com.example.html");
    });

    let row = "*".repeat(79);
    assert!(file.starts_with(&format!("/{row}\n")));
    assert!(file.contains("DO NOT EDIT"));
    assert!(file.ends_with("package com.example.html\n"));
}

#[test]
fn test_const_arguments_render_as_values() {
    let mut file = String::new();
    file.append("attributes[\"align\"]").define_is("align");
    file.function_call_consts(
        "attribute",
        &[Const::literal("align"), Const::reference("align")],
        &KOTLIN_CONVENTIONS,
    )
    .unwrap();

    assert_eq!(
        file,
        "attributes[\"align\"] = align\nattribute(\"align\", align)"
    );
}
