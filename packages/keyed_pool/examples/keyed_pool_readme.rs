//! Example that demonstrates the basic usage shown in the package documentation.
//!
//! Declares a pool of projectiles, checks some out, lets the pool grow and tears it down.

use keyed_pool::{PoolRegistry, Pooled, PooledObject, SeedPolicy};

#[derive(Debug)]
struct Projectile {
    damage: u32,
    serial: u32,
    in_flight: bool,
}

impl PooledObject for Projectile {
    fn pool_id(&self) -> &str {
        "projectile"
    }

    fn is_active(&self) -> bool {
        self.in_flight
    }

    fn create(&self) -> Pooled {
        Pooled::new(Self {
            damage: self.damage,
            serial: self.serial.wrapping_add(1),
            in_flight: false,
        })
    }

    fn activated(&mut self) {
        self.in_flight = true;
        println!("projectile {} launched", self.serial);
    }

    fn deactivated(&mut self) {
        self.in_flight = false;
    }

    fn destroyed(&mut self) {
        println!("projectile {} destroyed", self.serial);
    }
}

fn main() {
    println!("=== Keyed Pool README Example ===");

    let registry = PoolRegistry::new();

    registry.declare_with(
        Pooled::new(Projectile {
            damage: 12,
            serial: 0,
            in_flight: false,
        }),
        2,
        SeedPolicy::Exclude,
    );

    let first = registry.checkout("projectile").unwrap();
    let second = registry.checkout("projectile").unwrap();

    // Both pooled projectiles are in flight, so this one is manufactured on the spot.
    let third = registry.checkout("projectile").unwrap();
    println!(
        "pool size after growth: {}",
        registry.pool_len("projectile").unwrap()
    );

    let damage = third.downcast_ref::<Projectile>().unwrap().damage;
    println!("third projectile deals {damage} damage");

    registry.checkin(&first);
    registry.checkin(&second);
    registry.checkin(&third);

    registry.teardown_pool("projectile");

    println!("README example completed successfully!");
}
