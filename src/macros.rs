#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Static($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        patterns: [ $($pat:expr),+ $(,)? ],
        responses: $responses:expr
        $(,)?
    ) => {{
        $crate::Rule::from_parts($name, vec![ $($pat),+ ], $responses)
    }};
}
