//! Declaration descriptors.
//!
//! [`Var`] and [`Clazz`] are plain data descriptors for the declarations the
//! emitters format. They carry no behavior beyond fluent construction; the
//! formatting lives in [`emit`](crate::emit).

/// A property or parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    /// Declaration name.
    pub name: String,
    /// Declared type.
    pub ty: String,
    /// Emit `var` instead of `val`.
    pub mutable: bool,
    /// Emit the `override` modifier.
    pub overriding: bool,
    /// Never emit the keyword/override prefix, regardless of the caller's
    /// suppression flag.
    pub force_omit_keyword: bool,
    /// Default value expression; empty means none.
    pub default_value: String,
}

impl Var {
    /// Create an immutable, non-overriding declaration with no default.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            mutable: false,
            overriding: false,
            force_omit_keyword: false,
            default_value: String::new(),
        }
    }

    /// Emit as `var` instead of `val`.
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    /// Emit the `override` modifier.
    pub fn overriding(mut self) -> Self {
        self.overriding = true;
        self
    }

    /// Suppress the keyword/override prefix unconditionally.
    pub fn omit_keyword(mut self) -> Self {
        self.force_omit_keyword = true;
        self
    }

    /// Set a default value expression.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }
}

/// A class, interface, or singleton-object declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clazz {
    /// Declaration name.
    pub name: String,
    /// Generic type parameters.
    pub generics: Vec<String>,
    /// Properties declared in the constructor parameter list.
    pub constructor_vars: Vec<Var>,
    /// Supertype list.
    pub supertypes: Vec<String>,
    /// Emit the `public` modifier.
    pub is_public: bool,
    /// Emit the `abstract` modifier.
    pub is_abstract: bool,
    /// Emit the `open` modifier.
    pub is_open: bool,
    /// Emit as a singleton `object`.
    pub is_object: bool,
    /// Emit as an `interface`.
    pub is_trait: bool,
}

impl Clazz {
    /// Create a public class declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            constructor_vars: Vec::new(),
            supertypes: Vec::new(),
            is_public: true,
            is_abstract: false,
            is_open: false,
            is_object: false,
            is_trait: false,
        }
    }

    /// Add a generic type parameter.
    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    /// Add multiple generic type parameters.
    pub fn generics(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.generics.extend(params.into_iter().map(Into::into));
        self
    }

    /// Add a constructor property.
    pub fn constructor_var(mut self, var: Var) -> Self {
        self.constructor_vars.push(var);
        self
    }

    /// Add multiple constructor properties.
    pub fn constructor_vars(mut self, vars: impl IntoIterator<Item = Var>) -> Self {
        self.constructor_vars.extend(vars);
        self
    }

    /// Add a supertype.
    pub fn supertype(mut self, parent: impl Into<String>) -> Self {
        self.supertypes.push(parent.into());
        self
    }

    /// Add multiple supertypes.
    pub fn supertypes(mut self, parents: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.supertypes.extend(parents.into_iter().map(Into::into));
        self
    }

    /// Drop the `public` modifier.
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Emit the `abstract` modifier.
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Emit the `open` modifier.
    pub fn open(mut self) -> Self {
        self.is_open = true;
        self
    }

    /// Emit as a singleton object.
    pub fn object(mut self) -> Self {
        self.is_object = true;
        self
    }

    /// Emit as an interface.
    pub fn interface(mut self) -> Self {
        self.is_trait = true;
        self
    }

    /// The kind token for this declaration.
    ///
    /// Resolved by priority: object wins over interface wins over class, so
    /// at most one kind token is ever emitted.
    pub fn kind_token(&self) -> &'static str {
        if self.is_object {
            "object"
        } else if self.is_trait {
            "interface"
        } else {
            "class"
        }
    }
}
