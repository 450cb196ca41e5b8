pub mod session {
    use std::time::Duration;
    pub const BASE_URL: &str = "https://leetcode.com";
    pub const CN_BASE_URL: &str = "https://leetcode.cn";
    pub const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(300);
    pub const CSRF_COOKIE: &str = "csrftoken";
    pub const VERBOSE: bool = false;
}
pub mod submit {
    use std::time::Duration;
    pub const CHECK_DELAY: Duration = Duration::from_secs(1);
    pub const TIME_LIMIT: Duration = Duration::from_secs(30);
}
pub mod runtime {
    pub const MAX_RUNTIME: u32 = 2000;
    pub const NOT_FOUND_MESSAGE: &str = "No submission code for passed time/lang.";
}
pub mod scan {
    pub const MAX_PAGE: u32 = 30;
    pub const CONCURRENCY: usize = 1;
    pub const DESCRIPTION: &str = "{{marker}}, ai generated.";
}
