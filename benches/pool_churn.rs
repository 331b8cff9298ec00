//! Pool recycling benchmarks.
//!
//! The pool exists to keep grid rebuilds off the allocator; these measure
//! the spawn/despawn cycle a full-board rebuild produces.

use criterion::{criterion_group, criterion_main, Criterion};

use pairup::board::{CardSlot, GameContext, MatchEngine};
use pairup::core::{EngineConfig, GameRng, HostId, PrototypeId};
use pairup::pool::Pool;

fn pool_churn(c: &mut Criterion) {
    c.bench_function("spawn_despawn_100", |b| {
        let mut pool = Pool::new(PrototypeId::new(0), CardSlot::new);
        pool.prewarm(100);
        let host = HostId::new(0);

        b.iter(|| {
            let ids: Vec<_> = (0..100).map(|_| pool.spawn(host)).collect();
            for id in ids {
                pool.despawn(id);
            }
        });
    });
}

fn board_rebuild(c: &mut Criterion) {
    c.bench_function("rebuild_10x10", |b| {
        let mut ctx = GameContext::new(GameRng::new(42));
        let proto = ctx.slots.register(CardSlot::new);
        let mut engine = MatchEngine::new(proto, HostId::new(0), EngineConfig::immediate());
        engine.set_grid_size(10, 10);

        b.iter(|| {
            engine.build_board(&mut ctx);
        });
    });
}

criterion_group!(benches, pool_churn, board_rebuild);
criterion_main!(benches);
