use crate::models::concert_models::Concert;
use crate::models::user_models::CurrentUser;
use crate::pages::layout;
use crate::utils::html_utils::escape_html;

pub fn concerts_page(concerts: &[Concert], user: Option<&CurrentUser>, flash: Option<&str>) -> String {
    let is_admin = user.map(|u| u.is_admin).unwrap_or(false);
    let mut body = String::new();

    body.push_str("<h1>Concerts</h1>\n");

    if is_admin {
        body.push_str(
            r#"<div class="card">
    <h2>Add concert</h2>
    <form method="post" action="/add_concert">
        <input name="city" placeholder="City" required><br>
        <input name="venue" placeholder="Venue" required><br>
        <input name="date" type="date" required><br>
        <input name="url" placeholder="Ticket URL" required><br>
        <button type="submit">Add concert</button>
    </form>
</div>
"#,
        );
    }

    if concerts.is_empty() {
        body.push_str(r#"<p class="muted">No upcoming concerts.</p>"#);
    }

    for concert in concerts {
        let tickets = if concert.is_sold_out {
            r#"<span class="sold-out">SOLD OUT</span>"#.to_string()
        } else {
            format!(
                r#"<a href="{}">Tickets</a>"#,
                escape_html(&concert.ticket_url)
            )
        };

        body.push_str(&format!(
            r#"<div class="card">
    <h2>{city} — {venue}</h2>
    <div class="muted">{date}</div>
    {tickets}
</div>
"#,
            city = escape_html(&concert.city),
            venue = escape_html(&concert.venue),
            date = concert.concert_date.format("%Y-%m-%d"),
            tickets = tickets,
        ));
    }

    layout::page("Concerts", user, flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn concert(sold_out: bool) -> Concert {
        Concert {
            id: 1,
            city: "Tokyo".to_string(),
            venue: "Budokan".to_string(),
            concert_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            ticket_url: "https://tickets.example/1".to_string(),
            is_sold_out: sold_out,
        }
    }

    #[test]
    fn upcoming_concert_links_tickets() {
        let html = concerts_page(&[concert(false)], None, None);
        assert!(html.contains("https://tickets.example/1"));
        assert!(!html.contains("SOLD OUT"));
    }

    #[test]
    fn sold_out_concert_hides_ticket_link() {
        let html = concerts_page(&[concert(true)], None, None);
        assert!(html.contains("SOLD OUT"));
        assert!(!html.contains("https://tickets.example/1"));
    }
}
