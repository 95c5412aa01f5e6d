#[macro_export]
macro_rules! test {
    ($size:expr, $actual:expr, $expected:expr) => {
        let mut s = String::new();
        $actual.render_fmt($size, &mut s).unwrap();
        difference::assert_diff!(&s, $expected, "\n", 0);
    };
    ($actual:expr, $expected:expr) => {
        test!(70, $actual, $expected)
    };
}

/// Formats a syntax tree at the given width and compares the output, final newline included.
#[macro_export]
macro_rules! format_test {
    ($width:expr, $node:expr, $expected:expr) => {
        let options = prettyrb::FormatOptions {
            print_width: $width,
            ..prettyrb::FormatOptions::default()
        };
        let s = prettyrb::format("", &$node, &options, None).unwrap();
        difference::assert_diff!(&s, $expected, "\n", 0);
    };
    ($node:expr, $expected:expr) => {
        format_test!(80, $node, $expected)
    };
}
