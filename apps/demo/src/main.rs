//! # shopkit-demo
//!
//! Runs each shopkit flow once against the default adapters and prints what
//! it returned.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load config (`storefront.toml` in the platform config dir, then `SHOPKIT_*` env vars)
//! 3. Build the storefront with default adapters
//! 4. Walk through the pure rules, then the storefront flows
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=shopkit_storefront=trace` - Trace the storefront crate

use tracing::info;
use tracing_subscriber::EnvFilter;

use shopkit_core::coupon::{calculate_discount, get_coupons};
use shopkit_core::intro::{calculate_average, factorial, fizz_buzz};
use shopkit_core::validation::{can_drive, is_valid_username, validate_user_input};
use shopkit_core::{CreditCard, Money, Order, Stack};
use shopkit_storefront::{fetch_data, Storefront, StorefrontConfig, StorefrontResult};

#[tokio::main]
async fn main() -> StorefrontResult<()> {
    init_tracing();

    info!("Starting shopkit demo");

    let config = StorefrontConfig::load_or_default(None);
    let shop = Storefront::with_defaults(config);

    run_rules();
    run_flows(&shop).await?;

    match fetch_data().await {
        Ok(numbers) => println!("fetch_data        → {:?}", numbers),
        Err(err) => println!("fetch_data        → rejected: {}", err),
    }

    info!("Demo finished");
    Ok(())
}

/// Pure rules from shopkit-core.
fn run_rules() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    println!("stack.peek        → {:?}", stack.peek());
    println!("stack.pop         → {:?}", stack.pop());
    println!("stack.size        → {}", stack.size());

    for coupon in get_coupons() {
        println!("coupon            → {} ({}%)", coupon.code, coupon.discount.bps() / 100);
    }
    match calculate_discount(Money::from_cents(1000), "SAVE20") {
        Ok(price) => println!("SAVE20 on $10     → {}", price),
        Err(err) => println!("SAVE20 on $10     → {}", err),
    }

    match validate_user_input("al", 17) {
        Ok(message) => println!("validate_user_input → {}", message),
        Err(err) => println!("validate_user_input → {}", err),
    }
    println!("is_valid_username(\"shopper\") → {}", is_valid_username("shopper"));
    match can_drive(17, "UK") {
        Ok(allowed) => println!("can_drive(17, UK) → {}", allowed),
        Err(err) => println!("can_drive(17, UK) → {}", err),
    }

    println!("fizz_buzz(15)     → {}", fizz_buzz(15));
    println!("average [1,2,3]   → {:?}", calculate_average(&[1.0, 2.0, 3.0]));
    println!("factorial(5)      → {:?}", factorial(5));
}

/// Storefront flows over the default adapters.
async fn run_flows(shop: &Storefront) -> StorefrontResult<()> {
    println!("10 USD in AUD     → {}", shop.price_in_currency(10.0, "AUD"));
    println!("shipping (London) → {}", shop.shipping_info("London"));
    println!("render_page       → {}", shop.render_page().await);

    let order = Order {
        total_amount: Money::from_cents(1000),
    };
    let card = CreditCard {
        credit_card_number: "4111111111111111".to_string(),
    };
    println!("submit_order      → {:?}", shop.submit_order(&order, &card).await);

    println!("sign_up           → {}", shop.sign_up("name@domain.com").await?);
    shop.login("name@domain.com").await?;
    println!("login             → code sent");

    println!("is_online         → {}", shop.is_online());
    println!("get_discount      → {}", shop.get_discount());
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Defaults to INFO with debug output from the shopkit crates; `RUST_LOG`
/// overrides it.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopkit=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
