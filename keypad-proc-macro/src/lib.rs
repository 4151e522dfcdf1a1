use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, LitStr};

/// A procedural macro that decodes a string literal of phone keypad presses at compile time.
///
/// `phonepad!("4433555 555666#")` expands to the string literal `"HELLO"`, decoded with the
/// standard key map. Input that fails to decode is reported as a compile error at the literal.
#[proc_macro]
pub fn phonepad(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input_str = parse_macro_input!(input as LitStr);

    match phonepad_keypad::decode(&input_str.value()) {
        Ok(output) => {
            let output = LitStr::new(&output, Span::call_site());
            quote!(#output).into()
        }
        Err(err) => syn::Error::new(input_str.span(), format!("cannot decode keypad input: {err}"))
            .to_compile_error()
            .into(),
    }
}
