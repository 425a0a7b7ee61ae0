mod region_resolver_tests;

/// Installs a trace level logger once; later calls are no-ops.
pub(crate) fn init_logging() {
    let _ = colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
