//! Property tests for the entity caches.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use steam_social::state::{Friend, FriendsList};
use steam_social_proto::{FriendRelationship, SteamId};

#[derive(Debug, Clone)]
enum Op {
    Add(u32, u32),
    Remove(u32),
    SetName(u32, String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..16, 1u32..8).prop_map(|(id, rel)| Op::Add(id, rel)),
        (0u32..16).prop_map(Op::Remove),
        (0u32..16, "[a-z]{0,6}").prop_map(|(id, name)| Op::SetName(id, name)),
    ]
}

fn id(account: u32) -> SteamId {
    SteamId::from_parts(1, 1, 1, account)
}

proptest! {
    #[test]
    fn count_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let cache = FriendsList::new();
        let mut model: HashMap<SteamId, Friend> = HashMap::new();

        for op in ops {
            match op {
                Op::Add(account, rel) => {
                    let friend = Friend::new(id(account), FriendRelationship::from(rel));
                    let added = cache.add(friend.clone());
                    prop_assert_eq!(added, !model.contains_key(&friend.id));
                    model.entry(friend.id).or_insert(friend);
                }
                Op::Remove(account) => {
                    prop_assert_eq!(
                        cache.remove(id(account)),
                        model.remove(&id(account)).is_some()
                    );
                }
                Op::SetName(account, name) => {
                    cache.set_name(id(account), name.clone());
                    if let Some(friend) = model.get_mut(&id(account)) {
                        friend.name = name;
                    }
                }
            }
        }

        let snapshot = cache.get_copy();
        prop_assert_eq!(cache.count(), model.len());
        let keys: HashSet<_> = snapshot.keys().copied().collect();
        let expected: HashSet<_> = model.keys().copied().collect();
        prop_assert_eq!(keys, expected);
        for (key, friend) in &snapshot {
            prop_assert_eq!(*key, friend.id);
            prop_assert_eq!(Some(friend), model.get(key));
        }
    }

    #[test]
    fn snapshot_is_independent(names in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let cache = FriendsList::new();
        cache.add(Friend::new(id(1), FriendRelationship::Friend));
        let before = cache.get_copy();

        for name in names {
            cache.set_name(id(1), name);
        }
        prop_assert_eq!(before[&id(1)].name.as_str(), "");
    }
}
