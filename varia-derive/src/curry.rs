//! Implementation of the `curry!` procedural macro.
//!
//! Two input forms are accepted:
//!
//! 1. A closure literal: `curry!(|a, b, c| body)`; the arity is the number of
//!    closure parameters.
//! 2. A function path and an explicit arity: `curry!(add, 3)`.
//!
//! # Generated Code
//!
//! For arity 3 the expansion is:
//!
//! ```text
//! {
//!     let __varia_function = Rc::new(<function>);
//!     move |__varia_argument_0| {
//!         let __varia_function = Rc::clone(&__varia_function);
//!         let __varia_argument_0 = Rc::new(__varia_argument_0);
//!         move |__varia_argument_1| {
//!             let __varia_function = Rc::clone(&__varia_function);
//!             let __varia_argument_0 = Rc::clone(&__varia_argument_0);
//!             let __varia_argument_1 = Rc::new(__varia_argument_1);
//!             move |__varia_argument_2| __varia_function(
//!                 Clone::clone(&*__varia_argument_0),
//!                 Clone::clone(&*__varia_argument_1),
//!                 __varia_argument_2,
//!             )
//!         }
//!     }
//! }
//! ```
//!
//! Every intermediate closure is `Fn`, so a partial application can be saturated
//! any number of times. Captured arguments other than the last must be `Clone`.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, ExprPath, LitInt, Token};

/// Parsed arguments of `curry!`.
pub enum CurryInput {
    Closure(ExprClosure),
    Path { function: ExprPath, arity: usize },
}

impl Parse for CurryInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expression: Expr = input.parse()?;

        if input.is_empty() {
            return match expression {
                Expr::Closure(closure) => Ok(Self::Closure(closure)),
                Expr::Path(path) => Err(syn::Error::new(
                    path.span(),
                    "curry! with a function path requires an arity: curry!(function, 2)",
                )),
                other => Err(syn::Error::new(
                    other.span(),
                    "curry! requires a closure or a function path with an arity",
                )),
            };
        }

        input.parse::<Token![,]>()?;

        let Expr::Path(function) = expression else {
            return Err(syn::Error::new(
                expression.span(),
                "expected a function name or path",
            ));
        };

        let arity_literal: LitInt = input.parse().map_err(|error| {
            syn::Error::new(error.span(), "curry! expected an integer literal for arity")
        })?;
        let arity = arity_literal.base10_parse::<usize>()?;

        input.parse::<Option<Token![,]>>()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the arity"));
        }

        Ok(Self::Path { function, arity })
    }
}

/// Expands parsed `curry!` arguments into a chain of nested closures.
pub fn expand(input: CurryInput) -> syn::Result<TokenStream> {
    let (function, arity, span) = match input {
        CurryInput::Closure(closure) => {
            let arity = closure.inputs.len();
            let span = closure.span();
            (quote! { #closure }, arity, span)
        }
        CurryInput::Path { function, arity } => {
            let span = function.span();
            (quote! { #function }, arity, span)
        }
    };

    if arity < 2 {
        return Err(syn::Error::new(
            span,
            "curry! requires a function with at least 2 arguments",
        ));
    }

    Ok(nested_closures(&function, arity))
}

fn nested_closures(function: &TokenStream, arity: usize) -> TokenStream {
    let arguments: Vec<Ident> = (0..arity)
        .map(|index| format_ident!("__varia_argument_{}", index, span = Span::call_site()))
        .collect();
    let Some((last, captured)) = arguments.split_last() else {
        return TokenStream::new();
    };

    let mut body = quote! {
        move |#last| __varia_function(
            #(::std::clone::Clone::clone(&*#captured),)*
            #last
        )
    };

    for (index, argument) in captured.iter().enumerate().rev() {
        let earlier = &captured[..index];
        body = quote! {
            move |#argument| {
                let __varia_function = ::std::rc::Rc::clone(&__varia_function);
                #(let #earlier = ::std::rc::Rc::clone(&#earlier);)*
                let #argument = ::std::rc::Rc::new(#argument);
                #body
            }
        };
    }

    quote! {
        {
            let __varia_function = ::std::rc::Rc::new(#function);
            #body
        }
    }
}
