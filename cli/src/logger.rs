pub fn init() {
    env_logger::Builder::from_default_env().init();
}
