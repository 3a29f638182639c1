//! Builds a service host, uses its object pooling registry and shuts it down, with
//! diagnostics from the libraries printed to stdout.

use keyed_pool::{Pooled, PooledObject, SeedPolicy};
use service_host::{Service, ServiceHost};

#[derive(Debug)]
struct Coin {
    value: u32,
    visible: bool,
}

impl PooledObject for Coin {
    fn pool_id(&self) -> &str {
        "coin"
    }

    fn is_active(&self) -> bool {
        self.visible
    }

    fn create(&self) -> Pooled {
        Pooled::new(Self {
            value: self.value,
            visible: false,
        })
    }

    fn activated(&mut self) {
        self.visible = true;
    }

    fn deactivated(&mut self) {
        self.visible = false;
    }

    fn destroyed(&mut self) {}
}

#[derive(Debug, Default)]
struct Scoreboard {
    open: bool,
}

impl Service for Scoreboard {
    fn init(&mut self) {
        self.open = true;
        println!("scoreboard open");
    }

    fn destroy(&mut self) {
        if self.open {
            println!("scoreboard closed");
        }
        self.open = false;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut host = ServiceHost::builder()
        .service(Scoreboard::default())
        .build();

    let pools = host.object_pooling().clone();

    pools.declare_with(
        Pooled::new(Coin {
            value: 10,
            visible: false,
        }),
        3,
        SeedPolicy::Exclude,
    );

    let coin = pools.checkout("coin").unwrap();
    println!(
        "picked up a coin worth {}",
        coin.downcast_ref::<Coin>().unwrap().value
    );
    pools.checkin(&coin);

    // Logged as a warning, nothing else happens.
    pools.teardown_pool("gem");

    host.shutdown();
}
