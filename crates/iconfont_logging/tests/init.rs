use iconfont_logging::{iconfont_debug, iconfont_info, initialize, initialize_for_tests, LogDestination};
use log::LevelFilter;

#[test]
fn initializers_tolerate_an_existing_logger() {
    initialize(LogDestination::Terminal, LevelFilter::Info);
    initialize_for_tests();
    initialize(LogDestination::Terminal, LevelFilter::Debug);

    iconfont_info!("logger ready");
    iconfont_debug!("level {}", log::max_level());
    assert!(log::max_level() >= LevelFilter::Info);
}
