//! Rule programs as data.
//!
//! A [`Program`] is an arena owning every [`Reference`] and [`Function`] of a
//! set of rules. Hosts address them through [`ReferenceId`] and
//! [`FunctionId`] handles, which stay valid for the life of the program. A
//! function can be declared before its body is written, so bodies may call
//! the function itself (or each other) recursively.
//!
//! ```
//! use rulecraft_core::{FullType, Line, Program, Signature, Type, stdlib};
//!
//! let mut program = Program::new();
//! let logic = stdlib::logic(&mut program).unwrap();
//!
//! let result = program.variable("result", FullType::single(Type::Boolean));
//! let a = program.variable("a", FullType::single(Type::Boolean));
//! let b = program.variable("b", FullType::single(Type::Boolean));
//! let nand = program
//!     .declare("nand", Signature::returning(result, "whether not both").param(a, "").param(b, ""))
//!     .unwrap();
//!
//! let both = program.variable("both", FullType::single(Type::Boolean));
//! program
//!     .set_body(nand, vec![
//!         Line::assign(both, logic.and, [a, b]),
//!         Line::assign(result, logic.not, [both]),
//!     ])
//!     .unwrap();
//! assert_eq!(program.display_function(nand).to_string(), "nand(a, b) -> Boolean");
//! ```

mod error;
mod function;
mod line;
mod reference;
mod validate;


use core::fmt;

use ecow::EcoString;
use hashbrown::HashSet;
use tracing::debug;

use crate::{Rc, Vec, types::FullType, values::Value};

pub use error::ProgramError;
pub use function::{Body, Function, FunctionId, NativeFn, Signature};
pub use line::{Line, LineKind};
pub use reference::{LiteralError, Reference, ReferenceId};

/// Arena of references and functions.
#[derive(Debug, Clone, Default)]
pub struct Program {
    references: Vec<Reference>,
    functions: Vec<Function>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================================
    // References
    // ============================================================================

    pub fn add_reference(&mut self, reference: Reference) -> ReferenceId {
        let id = ReferenceId(self.references.len() as u32);
        self.references.push(reference);
        id
    }

    /// Add a parameter or local slot.
    pub fn variable(&mut self, name: impl Into<EcoString>, ty: FullType) -> ReferenceId {
        self.add_reference(Reference::variable(name, ty))
    }

    /// Add an inline literal such as `5`, `true` or an empty collection.
    pub fn literal(&mut self, name: impl Into<EcoString>, ty: FullType) -> ReferenceId {
        self.add_reference(Reference::literal(name, ty))
    }

    pub fn get_reference(&self, id: ReferenceId) -> Option<&Reference> {
        self.references.get(id.index())
    }

    /// # Panics
    ///
    /// Panics if `id` was not created by this program.
    pub fn reference(&self, id: ReferenceId) -> &Reference {
        &self.references[id.index()]
    }

    // ============================================================================
    // Functions
    // ============================================================================

    /// Declare an interpreted function with an empty body.
    ///
    /// The body is installed later with [`Program::set_body`]; until then,
    /// evaluating the function fails with a missing result.
    pub fn declare(
        &mut self,
        name: impl Into<EcoString>,
        signature: Signature,
    ) -> Result<FunctionId, ProgramError> {
        self.add_function(name.into(), signature, Body::Interpreted(Vec::new()))
    }

    /// Define a function implemented by the host.
    pub fn define_native(
        &mut self,
        name: impl Into<EcoString>,
        signature: Signature,
        callback: impl Fn(&[Value]) -> Value + 'static,
    ) -> Result<FunctionId, ProgramError> {
        let callback: NativeFn = Rc::new(callback);
        self.add_function(name.into(), signature, Body::Native(callback))
    }

    fn add_function(
        &mut self,
        name: EcoString,
        signature: Signature,
        body: Body,
    ) -> Result<FunctionId, ProgramError> {
        self.check_signature(&name, &signature)?;
        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(Function::new(name, signature, body));
        Ok(id)
    }

    fn check_signature(&self, function: &EcoString, signature: &Signature) -> Result<(), ProgramError> {
        let mut seen = HashSet::new();
        for &id in signature.references() {
            let reference = self
                .get_reference(id)
                .ok_or(ProgramError::UnknownReference(id))?;
            if reference.literal {
                return Err(ProgramError::LiteralParameter {
                    function: function.clone(),
                    name: reference.name.clone(),
                });
            }
            if !seen.insert(id) {
                return Err(ProgramError::DuplicateParameter {
                    function: function.clone(),
                    name: reference.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate `lines` and install them as the body of `id`.
    ///
    /// On error the previous body is left untouched.
    pub fn set_body(&mut self, id: FunctionId, lines: Vec<Line>) -> Result<(), ProgramError> {
        let function = self
            .get_function(id)
            .ok_or(ProgramError::UnknownFunction(id))?;
        if function.is_native() {
            return Err(ProgramError::NativeBody {
                function: function.name().into(),
            });
        }

        if let Err(error) = validate::check_body(self, function, &lines) {
            debug!(function = function.name(), %error, "Rejected function body");
            return Err(error);
        }

        self.functions[id.index()].set_body(Body::Interpreted(lines));
        Ok(())
    }

    /// Mark a function whose invocations must not be memoized (impure or
    /// side-effecting natives).
    pub fn set_uncacheable(&mut self, id: FunctionId, uncacheable: bool) -> Result<(), ProgramError> {
        let function = self
            .functions
            .get_mut(id.index())
            .ok_or(ProgramError::UnknownFunction(id))?;
        function.set_uncacheable(uncacheable);
        Ok(())
    }

    pub fn get_function(&self, id: FunctionId) -> Option<&Function> {
        self.functions.get(id.index())
    }

    /// # Panics
    ///
    /// Panics if `id` was not created by this program.
    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    pub fn functions(&self) -> impl Iterator<Item = (FunctionId, &Function)> {
        self.functions
            .iter()
            .enumerate()
            .map(|(index, function)| (FunctionId(index as u32), function))
    }

    /// First function with the given name.
    pub fn find_function(&self, name: &str) -> Option<FunctionId> {
        self.functions()
            .find(|(_, function)| function.name() == name)
            .map(|(id, _)| id)
    }

    /// Locals assigned before `line_index` in the body of `id`, in order of
    /// first assignment. These are what a line at that position may read
    /// besides the parameters.
    pub fn locals_for(&self, id: FunctionId, line_index: usize) -> Vec<ReferenceId> {
        let Some(lines) = self.get_function(id).and_then(Function::lines) else {
            return Vec::new();
        };

        let mut locals = Vec::new();
        for line in lines.iter().take(line_index) {
            if line.kind() == LineKind::Assignment && !locals.contains(&line.target()) {
                locals.push(line.target());
            }
        }
        locals
    }

    // ============================================================================
    // Display
    // ============================================================================

    pub fn display_line<'a>(&'a self, line: &'a Line) -> LineDisplay<'a> {
        LineDisplay {
            program: self,
            line,
        }
    }

    pub fn display_function(&self, id: FunctionId) -> FunctionDisplay<'_> {
        FunctionDisplay { program: self, id }
    }

    fn name_of(&self, id: ReferenceId) -> &str {
        self.get_reference(id)
            .map(|reference| reference.name.as_str())
            .unwrap_or("?")
    }

    fn write_call(
        &self,
        f: &mut fmt::Formatter<'_>,
        callee: FunctionId,
        arguments: &[ReferenceId],
    ) -> fmt::Result {
        let name = self.get_function(callee).map(Function::name).unwrap_or("?");
        write!(f, "{}(", name)?;
        for (i, &argument) in arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.name_of(argument))?;
        }
        write!(f, ")")
    }
}

/// Renders a line as `next = element(1, path)`, `return true if
/// shorterthan(path, 2)` or `return result`.
pub struct LineDisplay<'a> {
    program: &'a Program,
    line: &'a Line,
}

impl fmt::Display for LineDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.program.name_of(self.line.target());
        match (self.line.kind(), self.line.call()) {
            (LineKind::Assignment, Some(callee)) => {
                write!(f, "{} = ", target)?;
                self.program.write_call(f, callee, self.line.arguments())
            }
            (LineKind::ConditionalReturn, Some(gate)) => {
                write!(f, "return {} if ", target)?;
                self.program.write_call(f, gate, self.line.arguments())
            }
            _ => write!(f, "return {}", target),
        }
    }
}

/// Renders a function header as `canfollow(vehicle, path) -> Boolean`.
pub struct FunctionDisplay<'a> {
    program: &'a Program,
    id: FunctionId,
}

impl fmt::Display for FunctionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(function) = self.program.get_function(self.id) else {
            return write!(f, "?");
        };
        let signature = function.signature();
        self.program.write_call(f, self.id, signature.parameters())?;
        match self.program.get_reference(signature.result()) {
            Some(result) => write!(f, " -> {}", result.ty),
            None => Ok(()),
        }
    }
}
