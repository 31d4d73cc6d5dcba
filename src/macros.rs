/// Expands to a doc string linking to a section of the JVM specification.
macro_rules! see_jvm_spec {
    ($sec:literal $(, $sub:literal)*) => {
        concat!(
            "See the [JVM Specification §",
            $sec, $(".", $sub,)*
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $sec,
            ".html#jvms-",
            $sec, $(".", $sub,)*
            ") for more information."
        )
    };
}

pub(crate) use see_jvm_spec;

/// Logs through the [`log`] facade only when `$verbose` holds, so that
/// nothing is formatted while the passes run silently.
macro_rules! verbose_log {
    ($verbose:expr, $level:ident, $($arg:tt)+) => {
        if $verbose {
            log::$level!($($arg)+);
        }
    };
}

pub(crate) use verbose_log;
