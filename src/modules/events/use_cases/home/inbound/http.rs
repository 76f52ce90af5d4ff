pub const WELCOME: &str = "Welcome home!";

pub async fn handle() -> &'static str {
    WELCOME
}
