// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! css {
    // Format + parse a CSS selector in one go.
    // Yields Result<(Selector, String), CellFault>; the String is the address, kept for error reports.
    ($($arg:tt)*) => {{
        let address = ::std::format!($($arg)*);
        // The parse error borrows `address`; own it before handing `address` back.
        let parsed = ::scraper::Selector::parse(&address).map_err(|e| e.to_string());
        match parsed {
            Ok(sel) => Ok((sel, address)),
            Err(e) => Err($crate::error::CellFault::BadSelector(e)),
        }
    }};
}
