// src/macros.rs

/// Owned-string shorthand.
///
/// `s!()` is empty, a string literal formats (`s!("{team} vs {opp}")`,
/// `s!("{} games", n)`), and any other expression goes through `String::from`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($fmt:literal $(, $($arg:tt)+)?) => {
        ::std::format!($fmt $(, $($arg)+)?)
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate `AsRef<str>` pieces (`&str`, `String`, `Cow<str>`) into one
/// `String`, sized up front.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let parts: &[&str] = &[$(::std::convert::AsRef::<str>::as_ref(&$part)),+];
        parts.concat()
    }};
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    #[test]
    fn s_covers_empty_convert_and_format() {
        assert_eq!(s!(), "");
        assert_eq!(s!("Nets"), "Nets");
        assert_eq!(s!("{} vs {}", "Nets", 3), "Nets vs 3");
        let team = "Heat";
        assert_eq!(s!("{team} B2B"), "Heat B2B");
        assert_eq!(s!(team), "Heat");
    }

    #[test]
    fn join_mixes_string_kinds() {
        let stem: Cow<str> = Cow::Borrowed("teams");
        let ext = String::from("csv");
        assert_eq!(join!(stem, ".", ext), "teams.csv");
    }
}
