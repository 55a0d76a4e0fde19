//! The closed catalogue of built-in operators.
//!
//! Operator symbols are resolved to [`Builtin`] once, when a program is parsed.

use std::fmt;

macro_rules! define_builtins {
    ($($(#[$doc:meta])* $variant:ident = $symbol:literal, $operands:literal;)*) => {
        /// A built-in operator.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Builtin {
            $($(#[$doc])* $variant,)*
        }

        impl Builtin {
            /// Every operator, in catalogue order.
            pub const ALL: &'static [Builtin] = &[$(Builtin::$variant,)*];

            /// The source-text symbol for this operator.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Builtin::$variant => $symbol,)*
                }
            }

            /// Resolve a source-text symbol to an operator.
            pub fn from_symbol(symbol: &str) -> Option<Builtin> {
                match symbol {
                    $($symbol => Some(Builtin::$variant),)*
                    _ => None,
                }
            }

            /// Minimum number of operands the operator reads from the operand stack.
            ///
            /// `copy` reads one count and then that many more items; `begin` is a
            /// no-op on an empty stack, so both report their fixed minimum.
            pub const fn min_operands(self) -> usize {
                match self {
                    $(Builtin::$variant => $operands,)*
                }
            }
        }
    };
}

define_builtins! {
    Add = "add", 2;
    Sub = "sub", 2;
    Mul = "mul", 2;
    /// Always produces a real.
    Div = "div", 2;
    /// Floored modulo: the result takes the sign of the divisor.
    Mod = "mod", 2;
    Lt = "lt", 2;
    Gt = "gt", 2;
    Eq = "eq", 2;
    Neg = "neg", 1;
    /// `array index value put` mutates the array in place and pushes it back.
    Put = "put", 3;
    Length = "length", 1;
    Get = "get", 2;
    And = "and", 2;
    Or = "or", 2;
    Not = "not", 1;
    Dup = "dup", 1;
    Exch = "exch", 2;
    Pop = "pop", 1;
    Copy = "copy", 1;
    Clear = "clear", 0;
    /// Writes the operand stack, top first, to the print sink.
    Stack = "stack", 0;
    /// `=`: pops one value and writes it to the print sink.
    Print = "=", 1;
    Count = "count", 0;
    Dict = "dict", 1;
    Begin = "begin", 0;
    End = "end", 0;
    Def = "def", 2;
    If = "if", 2;
    IfElse = "ifelse", 3;
    For = "for", 4;
    ForAll = "forall", 2;
}

impl Builtin {
    /// Whether the operator re-enters the execution engine.
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Builtin::If | Builtin::IfElse | Builtin::For | Builtin::ForAll
        )
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for &op in Builtin::ALL {
            assert_eq!(Builtin::from_symbol(op.symbol()), Some(op), "{op:?}");
        }
    }

    #[test]
    fn catalogue_is_complete() {
        let surface = "add sub mul div mod lt gt eq neg put length get and or not dup exch \
                       pop copy clear stack = count dict begin end def if ifelse for forall";
        let symbols: Vec<&str> = Builtin::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, surface.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn unknown_symbols_do_not_resolve() {
        assert_eq!(Builtin::from_symbol("square"), None);
        assert_eq!(Builtin::from_symbol("ADD"), None);
        assert_eq!(Builtin::from_symbol("/add"), None);
    }

    #[test]
    fn control_flow_operators() {
        let control: Vec<Builtin> = Builtin::ALL
            .iter()
            .copied()
            .filter(|op| op.is_control_flow())
            .collect();
        assert_eq!(
            control,
            vec![Builtin::If, Builtin::IfElse, Builtin::For, Builtin::ForAll]
        );
    }
}
