use chrono::Duration;
use clap::Args;
use serde_json::json;
use uuid::Uuid;

use crate::auth::{issue_token, Claims};
use crate::cli::OutputFormat;
use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(long, help = "Tenant id (uuid)")]
    pub tenant_id: Uuid,

    #[arg(long, help = "Tenant display slug")]
    pub tenant_slug: String,

    #[arg(long, help = "User id (uuid)")]
    pub user_id: Uuid,

    #[arg(long, default_value = "member", help = "User role")]
    pub role: String,

    #[arg(long, help = "Display name")]
    pub name: Option<String>,

    #[arg(long, help = "Email address")]
    pub email: Option<String>,

    #[arg(long, default_value_t = 24, help = "Lifetime in hours")]
    pub ttl_hours: i64,
}

pub fn handle(args: TokenArgs, config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let claims = Claims::new(
        args.tenant_id,
        args.tenant_slug,
        args.user_id,
        args.role,
        Duration::hours(args.ttl_hours),
    )
    .with_name(args.name)
    .with_email(args.email);

    let token = issue_token(&claims, &config.auth.jwt_secret)?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "token": token,
                "cookie": config.auth.cookie_name,
                "expires_at": claims.exp,
            }))?
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
