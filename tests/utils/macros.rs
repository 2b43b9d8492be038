#[allow(unused_macros)]
macro_rules! assert_error {
    ($result:expr, $error:expr) => {{
        let error = $result.expect_err("expected an error");
        assert_eq!(error.code(), $error.code(), "got `{}`", error);
        assert!(error.is_constraint_violation() == $error.is_constraint_violation());
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;

#[allow(unused_macros)]
macro_rules! enable_logging {
    ($level:ident) => {{
        use ::tracing::level_filters::LevelFilter;
        use ::tracing_subscriber::{
            layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
        };

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::$level.into())
            .from_env_lossy();

        ::tracing_subscriber::registry()
            .with(
                ::tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()
            .ok();
    }};
}

#[allow(unused_imports)]
pub(crate) use enable_logging;
