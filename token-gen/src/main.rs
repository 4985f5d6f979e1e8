use campus_auth::{AuthConfig, Authenticator, MAX_TOKEN_TTL_HOURS, SubjectId};
use chrono::{Duration, Utc};
use clap::Parser;

/// Issue a bearer token for local testing against the campus API.
///
/// - Signs `{user_id, exp}` with HS256 using the same secret as the server
/// - Outputs:
///   - the compact JWT
///   - its expiry (RFC 3339)
///   - a ready-to-paste `Authorization` header
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Subject to embed as `user_id`. Numeric values are encoded as integers.
    #[arg(long)]
    user_id: String,

    /// Shared HS256 secret (at least 32 bytes).
    #[arg(long, env = "AUTH_SECRET", hide_env_values = true)]
    secret: String,

    /// Token lifetime in hours (1 to one year).
    #[arg(
        long,
        default_value_t = 24,
        value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_HOURS)
    )]
    ttl_hours: i64,

    /// Issue a token that expired an hour ago (for exercising 401 paths).
    #[arg(long, default_value_t = false)]
    expired: bool,

    /// Print only the token (no extra lines)
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn parse_subject(raw: &str) -> SubjectId {
    match raw.parse::<i64>() {
        Ok(id) => SubjectId::Int(id),
        Err(_) => SubjectId::Text(raw.to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config =
        AuthConfig::new(args.secret.as_bytes())?.with_token_ttl(Duration::hours(args.ttl_hours))?;
    let auth = Authenticator::new(config);

    let subject = parse_subject(&args.user_id);
    let credential = if args.expired {
        auth.issue_with_expiry(subject, Utc::now() - Duration::hours(1))?
    } else {
        auth.issue(subject)?
    };

    if args.quiet {
        println!("{}", credential.token);
        return Ok(());
    }

    println!("token: {}", credential.token);
    println!("expires_at: {}", credential.expires_at.to_rfc3339());
    println!("Authorization: {}", credential.bearer_header());

    Ok(())
}
