use intervu_app::Session;
use intervu_core::{AddOn, Difficulty, Duration, InterviewType};
use intervu_order::{PaymentGateway, SimulatedGateway};
use intervu_questions::{LoggingTracker, QuestionBank, QuestionFilter, TrackingSink};
use intervu_store::{Config, SessionStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn dollars(cents: i32) -> String {
    format!("${:.2}", f64::from(cents) / 100.0)
}

/// Scripted end-to-end run of the booking flow: configure, browse
/// questions, check out.
#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intervu=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "no config files found, using defaults");
        Config::default()
    });

    let store = SessionStore::new(chrono::Duration::minutes(config.cache.ttl_minutes));
    let mut session = Session::new(store);

    session
        .set_interview_type(Some(InterviewType::Technical))
        .expect("set interview type");
    session
        .set_difficulty(Some(Difficulty::Mid))
        .expect("set difficulty");
    session
        .set_duration(Some(Duration::Min45))
        .expect("set duration");
    session.add_topic("system design basics").expect("add topic");
    session.add_topic("concurrency").expect("add topic");
    tracing::info!(price = %dollars(session.price_cents()), "configured session");

    let notices = session
        .toggle_add_on(AddOn::AiFollowUp)
        .expect("toggle add-on");
    for notice in notices {
        tracing::warn!(%notice, "adjusted");
    }
    tracing::info!(price = %dollars(session.price_cents()), "with AI follow-up");

    let bank = QuestionBank::load().expect("question bank");
    let filter = QuestionFilter {
        difficulty: Some("Mid".to_string()),
        ..Default::default()
    };
    let tracker: Arc<dyn TrackingSink> = Arc::new(LoggingTracker);
    if let Some(top) = bank.filter(&filter).first() {
        tracing::info!(title = %top.title, score = top.score, "top practice question");
        session.select_question(&top.id, &tracker);
    }

    let mut checkout = session.begin_checkout();
    match checkout.apply_coupon("FIRST50") {
        Ok(applied) => {
            tracing::info!(discount = %dollars(applied.discount_cents), "coupon applied")
        }
        Err(err) => tracing::warn!(error = %err, "coupon rejected"),
    }
    tracing::info!(total = %dollars(checkout.total_cents()), "amount due");

    let gateway = SimulatedGateway::new(
        std::time::Duration::from_millis(config.payment.delay_ms),
        config.payment.success_rate,
    );
    pay_with_retry(&mut checkout, &gateway).await;
}

async fn pay_with_retry(checkout: &mut intervu_order::CheckoutSession, gateway: &dyn PaymentGateway) {
    for attempt in 1..=3 {
        match checkout.pay(gateway, "Jordan Rivera", "jordan@example.com").await {
            Ok(receipt) => {
                tracing::info!(receipt_id = %receipt.id, amount = %dollars(receipt.amount_cents), "payment successful");
                return;
            }
            Err(err) => tracing::warn!(attempt, error = %err, "payment attempt failed"),
        }
    }
    tracing::error!("giving up after 3 attempts");
}
