use clap::Args;

use crate::auth::{generate_jwt, Access, Claims};
use crate::config;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(long, help = "Subject recorded in the token")]
    pub subject: String,

    #[arg(long, default_value = "write", help = "Access level: read or write")]
    pub access: Access,

    #[arg(long, help = "Lifetime in hours (defaults to JWT_EXPIRY_HOURS)")]
    pub hours: Option<u64>,
}

pub fn handle(args: TokenArgs) -> anyhow::Result<()> {
    let security = &config::config().security;
    let hours = args.hours.unwrap_or(security.jwt_expiry_hours);

    let claims = Claims::new(args.subject, args.access, hours)?;
    let token = generate_jwt(&claims, &security.jwt_secret)?;

    println!("{}", token);
    Ok(())
}
