//! Modifier and state flags shared by declarations and elements.

use bitflags::bitflags;

bitflags! {
    /// Flags attached to declarations, parameters and later program elements.
    ///
    /// The parser sets the modifier flags; the remaining bits are reserved for
    /// the phases that consume the AST.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct CommonFlags: u32 {
        // === Modifiers (bits 0-13) ===

        /// Has an `import` modifier.
        const IMPORT = 1 << 0;
        /// Has an `export` modifier.
        const EXPORT = 1 << 1;
        /// Has a `declare` modifier.
        const DECLARE = 1 << 2;
        /// Has a `const` modifier.
        const CONST = 1 << 3;
        /// Has a `let` modifier.
        const LET = 1 << 4;
        /// Has a `static` modifier.
        const STATIC = 1 << 5;
        /// Has a `readonly` modifier.
        const READONLY = 1 << 6;
        /// Has an `abstract` modifier.
        const ABSTRACT = 1 << 7;
        /// Has a `public` modifier.
        const PUBLIC = 1 << 8;
        /// Has a `private` modifier.
        const PRIVATE = 1 << 9;
        /// Has a `protected` modifier.
        const PROTECTED = 1 << 10;
        /// Has a `get` modifier.
        const GET = 1 << 11;
        /// Has a `set` modifier.
        const SET = 1 << 12;
        /// Has an `override` modifier.
        const OVERRIDE = 1 << 13;

        // === Extended modifiers (bits 14-15) ===

        /// Has a definite assignment assertion `!`.
        const DEFINITELY_ASSIGNED = 1 << 14;
        /// Is part of an ambient context.
        const AMBIENT = 1 << 15;

        // === Element state (bits 16-29) ===

        /// Is generic.
        const GENERIC = 1 << 16;
        /// Is part of a generic context.
        const GENERIC_CONTEXT = 1 << 17;
        /// Is an instance member.
        const INSTANCE = 1 << 18;
        /// Is a constructor.
        const CONSTRUCTOR = 1 << 19;
        /// Is a module export.
        const MODULE_EXPORT = 1 << 20;
        /// Is a module import.
        const MODULE_IMPORT = 1 << 21;
        /// Is resolved.
        const RESOLVED = 1 << 22;
        /// Is compiled.
        const COMPILED = 1 << 23;
        /// Did error.
        const ERRORED = 1 << 24;
        /// Has been inlined.
        const INLINED = 1 << 25;
        /// Is scoped.
        const SCOPED = 1 << 26;
        /// Is a stub.
        const STUB = 1 << 27;
        /// Is a virtual overload.
        const VIRTUAL_OVERLOAD = 1 << 28;
        /// Is (part of) a closure.
        const CLOSURE = 1 << 29;
    }
}

impl CommonFlags {
    /// Access modifiers.
    pub const ACCESS: Self = Self::from_bits_truncate(
        Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits(),
    );
}
