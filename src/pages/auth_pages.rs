use crate::models::user_models::CurrentUser;
use crate::pages::layout;

pub fn login_page(user: Option<&CurrentUser>, flash: Option<&str>) -> String {
    let body = r#"<h1>Log in</h1>
<div class="card">
    <form method="post" action="/login">
        <input name="username" placeholder="Username" required><br>
        <input type="password" name="password" placeholder="Password" required><br>
        <button type="submit">Log in</button>
    </form>
    <p class="muted">No account yet? <a href="/register">Register</a></p>
</div>
"#;

    layout::page("Log in", user, flash, body)
}

pub fn register_page(user: Option<&CurrentUser>, flash: Option<&str>) -> String {
    let body = r#"<h1>Register</h1>
<div class="card">
    <form method="post" action="/register">
        <input name="username" placeholder="Username" required><br>
        <input type="password" name="password" placeholder="Password" required><br>
        <button type="submit">Create account</button>
    </form>
    <p class="muted">Already registered? <a href="/login">Log in</a></p>
</div>
"#;

    layout::page("Register", user, flash, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_posts_to_login() {
        let html = login_page(None, None);
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"type="password""#));
    }

    #[test]
    fn register_page_shows_flash() {
        let html = register_page(None, Some("Registration failed (username may be taken)"));
        assert!(html.contains("Registration failed"));
    }
}
