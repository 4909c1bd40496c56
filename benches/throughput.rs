use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use bytes::{BufMut, Bytes, BytesMut};
use std::sync::Arc;
use steam_social::config::SocialConfig;
use steam_social::{ChannelTransport, Social};
use steam_social_proto::codec::ROSTER_ENTRY_PADDING;
use steam_social_proto::message::{ChatEnterHeader, FriendListEntry, FriendsList};
use steam_social_proto::{
    ChatPermissions, ClanPermissions, Inbound, MemberRecord, RosterReader, SteamId,
};

const ROSTER_SIZE: usize = 64;

fn roster_payload() -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_slice(b"Lobby\0");
    buf.put_u8(0);
    for account in 0..ROSTER_SIZE as u32 {
        MemberRecord {
            id: SteamId::from_parts(1, 1, 1, account),
            chat_permissions: ChatPermissions::from_bits_retain(8),
            clan_permissions: ClanPermissions::from_bits_retain(4),
        }
        .encode(&mut buf);
        buf.put_bytes(0, ROSTER_ENTRY_PADDING);
    }
    buf.freeze()
}

fn roster_decode_benchmark(c: &mut Criterion) {
    let payload = roster_payload();
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("decode_roster", |b| {
        b.iter(|| {
            RosterReader::new(&payload, ROSTER_SIZE)
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        })
    });

    group.finish();
}

fn dispatch_benchmark(c: &mut Criterion) {
    let (transport, _outbound) = ChannelTransport::new(SteamId::from_parts(1, 1, 1, 42));
    let (social, events) = Social::new(Arc::new(transport), SocialConfig::default());
    drop(events);
    let payload = roster_payload();

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    group.bench_function("chat_enter", |b| {
        b.iter_batched(
            || Inbound::ChatEnter {
                header: ChatEnterHeader {
                    chat_id: SteamId::from_parts(1, 8, 0x80000, 5),
                    num_members: ROSTER_SIZE as i32,
                    ..ChatEnterHeader::default()
                },
                payload: payload.clone(),
            },
            |msg| social.handle(msg).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("incremental_friends_list", |b| {
        b.iter_batched(
            || {
                Inbound::FriendsList(FriendsList {
                    incremental: true,
                    friends: (0..16)
                        .map(|account| FriendListEntry {
                            id: SteamId::from_parts(1, 1, 1, account),
                            relationship: 3,
                        })
                        .collect(),
                })
            },
            |msg| social.handle(msg).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, roster_decode_benchmark, dispatch_benchmark);
criterion_main!(benches);
