//! Kotlin declaration emitters.
//!
//! [`Emit`] extends any [`Sink`] with the formatting operations the
//! generator composes into whole source files: package/import headers, the
//! generated-file banner, property and enum-entry rendering, class bodies,
//! function signatures and calls, and block scoping.
//!
//! Every emitter is a forward-only, single-pass writer: it appends its tokens
//! to the sink and returns the receiver for chaining. Body callbacks are
//! invoked synchronously exactly once against the same sink, so nested
//! emissions land in strict call order. Once appended, text is never revised;
//! a failure partway through leaves the sink partially written and the caller
//! must discard it.

use crate::decl::{Clazz, Var};
use crate::error::Result;
use crate::konst::Const;
use crate::naming::Conventions;
use crate::sink::Sink;

/// Kotlin declaration emitters over an append-only sink.
///
/// Implemented for every [`Sink`]; bring the trait into scope and emit
/// directly into a `String` or any custom sink.
///
/// # Example
///
/// ```
/// use ktgen::{Clazz, Emit, Var, with};
///
/// let out = with(String::new(), |out| {
///     out.clazz(&Clazz::new("Point").constructor_var(Var::new("x", "Int")), |_| {});
/// });
/// assert_eq!(out, "public class Point(val x : Int) {\n}\n");
/// ```
pub trait Emit: Sink {
    /// Emit a `package` header line.
    fn packg(&mut self, name: &str) -> &mut Self {
        self.append("package ").append(name).append("\n")
    }

    /// Emit an `import` line.
    fn import(&mut self, name: &str) -> &mut Self {
        self.append("import ").append(name).append("\n")
    }

    /// Emit the generated-file banner comment.
    ///
    /// A block comment framed by two 79-character rows of `*`, carrying the
    /// `DO NOT EDIT` warning and the provenance line.
    fn warning(&mut self) -> &mut Self {
        self.append("/");
        self.append(&"*".repeat(79));
        self.append("\n");
        self.append("    DO NOT EDIT\n");
        self.append("    This file was generated by ktgen\n");
        self.append(&"*".repeat(79));
        self.append("/")
    }

    /// Emit a [`Const`] rendered as an expression.
    fn const_value(&mut self, value: &Const, conventions: &Conventions) -> Result<&mut Self> {
        let rendered = value.as_value(conventions)?;
        Ok(self.append(&rendered))
    }

    /// Emit a property or parameter declaration.
    ///
    /// The keyword/override prefix (`override`, then `var` or `val`) appears
    /// only when neither `omit_keyword` nor the var's own
    /// `force_omit_keyword` is set. A non-empty `receiver` prefixes the name
    /// with `receiver.` for extension-style declarations. The default value
    /// is appended iff non-empty.
    fn variable(&mut self, var: &Var, omit_keyword: bool, receiver: &str) -> &mut Self {
        if !omit_keyword && !var.force_omit_keyword {
            if var.overriding {
                self.append("override ");
            }
            self.append(if var.mutable { "var " } else { "val " });
        }

        if !receiver.is_empty() {
            self.receiver_dot(receiver);
        }
        self.append(&var.name).append(" : ").append(&var.ty);

        if !var.default_value.is_empty() {
            self.append(" = ").append(&var.default_value);
        }

        self
    }

    /// Emit an enumeration entry.
    ///
    /// A bare name when `arguments` is empty, otherwise
    /// `Name(arg, arg)` followed by a newline.
    fn enum_entry<A: AsRef<str>>(&mut self, name: &str, arguments: &[A]) -> &mut Self {
        self.append(name);
        if !arguments.is_empty() {
            self.append("(");
            for (i, arg) in arguments.iter().enumerate() {
                if i != 0 {
                    self.append(", ");
                }
                self.append(arg.as_ref());
            }
            self.append(")\n");
        }
        self
    }

    /// Emit a ` by <expression>` delegation clause and a blank line.
    fn delegate_by(&mut self, expression: &str) -> &mut Self {
        self.append(" by ").append(expression).empty_line()
    }

    /// Emit the accessor prefix for a custom getter.
    fn getter(&mut self) -> &mut Self {
        self.append("    get() ")
    }

    /// Emit a custom setter with the given body.
    ///
    /// The setter parameter name is fixed at `newValue`.
    fn setter(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.append("    set(newValue) {");
        body(self);
        self.append("}\n")
    }

    /// Emit a class, interface, or object declaration with the given body.
    ///
    /// Header order is a fixed formatting contract: modifiers
    /// (`public`, `abstract`, `open`), the kind token, the name, generic
    /// parameters, constructor properties (keyword included), supertypes,
    /// then the body between `{` and `}`.
    fn clazz(&mut self, clazz: &Clazz, body: impl FnOnce(&mut Self)) -> &mut Self {
        let mut tokens: Vec<&str> = Vec::new();
        if clazz.is_public {
            tokens.push("public");
        }
        if clazz.is_abstract {
            tokens.push("abstract");
        }
        if clazz.is_open {
            tokens.push("open");
        }
        tokens.push(clazz.kind_token());
        tokens.push(&clazz.name);
        self.append(&tokens.join(" "));

        if !clazz.generics.is_empty() {
            self.append("<").append(&clazz.generics.join(", ")).append(">");
        }

        if !clazz.constructor_vars.is_empty() {
            self.append("(");
            for (i, var) in clazz.constructor_vars.iter().enumerate() {
                if i != 0 {
                    self.append(", ");
                }
                self.variable(var, false, "");
            }
            self.append(")");
        }

        if !clazz.supertypes.is_empty() {
            self.append(" : ").append(&clazz.supertypes.join(", "));
        }

        self.append(" {\n");
        body(self);
        self.append("}\n")
    }

    /// Emit a function signature.
    ///
    /// Arguments are rendered keyword-suppressed. A non-empty `receiver`
    /// yields an extension-style declaration; the return type is appended
    /// iff non-empty.
    fn function(
        &mut self,
        name: &str,
        arguments: &[Var],
        return_type: &str,
        generics: &[String],
        receiver: &str,
    ) -> &mut Self {
        self.append("fun ");

        if !generics.is_empty() {
            self.append("<").append(&generics.join(", ")).append("> ");
        }

        if !receiver.is_empty() {
            self.receiver_dot(receiver);
        }

        self.append(name).append("(");
        for (i, arg) in arguments.iter().enumerate() {
            if i != 0 {
                self.append(", ");
            }
            self.variable(arg, true, "");
        }
        self.append(")");

        if !return_type.is_empty() {
            self.append(" : ").append(return_type);
        }

        self
    }

    /// Emit a call expression: `name(arg, arg)`.
    fn function_call<A: AsRef<str>>(&mut self, name: &str, arguments: &[A]) -> &mut Self {
        self.append(name).append("(");
        for (i, arg) in arguments.iter().enumerate() {
            if i != 0 {
                self.append(", ");
            }
            self.append(arg.as_ref());
        }
        self.append(")")
    }

    /// Emit a call expression with [`Const`] arguments rendered as values.
    fn function_call_consts(
        &mut self,
        name: &str,
        arguments: &[Const],
        conventions: &Conventions,
    ) -> Result<&mut Self> {
        let rendered = arguments
            .iter()
            .map(|c| c.as_value(conventions))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.function_call(name, &rendered))
    }

    /// Emit `receiver.` for a qualified name.
    fn receiver_dot(&mut self, receiver: &str) -> &mut Self {
        self.append(receiver).append(".")
    }

    /// Emit a multi-line block: `{`, the body, `}`.
    fn block(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.append("{\n");
        body(self);
        self.append("}\n")
    }

    /// Emit a single-line block: `{ body }`.
    fn block_short(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.append("{ ");
        body(self);
        self.append(" }\n")
    }

    /// Emit ` = <expression>` and end the line.
    fn define_is(&mut self, expression: &str) -> &mut Self {
        self.append(" = ").append(expression).append("\n")
    }

    /// Emit one blank line.
    fn empty_line(&mut self) -> &mut Self {
        self.append("\n")
    }
}

impl<S: Sink + ?Sized> Emit for S {}
