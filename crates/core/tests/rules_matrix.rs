use buckshot_core::{
    apply_item, dealer_choose_target, dealer_take_turn, dealer_use_items, double_or_nothing,
    Event, EventBus, GameError, GameState, InventoryError, Item, ItemKind, Phase, Player,
    RngSource, RulesConfig, ScriptedRng, Shell, ShellType, Shotgun, TurnOutcome,
};

fn duel(hp: u32) -> GameState {
    GameState::new(vec![Player::with_hp("Player", hp), Player::with_hp("Dealer", hp)])
}

fn table(seats: usize) -> GameState {
    GameState::new((0..seats).map(|seat| Player::with_hp(format!("p{seat}"), 1)).collect())
}

fn load(state: &mut GameState, kinds: &[ShellType]) {
    state.shotgun.load(kinds.iter().copied().map(Shell::new).collect());
}

macro_rules! dealer_priority_case {
    ($name:ident, [$($held:expr),*], $used:expr, [$($left:expr),*]) => {
        #[test]
        fn $name() {
            let mut state = duel(2);
            state.players[1].set_hp(1);
            load(&mut state, &[ShellType::Live]);
            for item in [$($held),*] {
                state.players[1].items.push(item);
            }
            let mut events = EventBus::default();
            assert_eq!(dealer_use_items(&mut state, &mut events), Some($used));
            assert_eq!(state.players[1].items.kinds(), vec![$($left),*]);
        }
    };
}

dealer_priority_case!(
    dealer_prefers_handcuffs_over_beer,
    [Item::Beer, Item::Handcuffs],
    ItemKind::Handcuffs,
    [ItemKind::Beer]
);
dealer_priority_case!(
    dealer_prefers_adrenaline_over_inverter,
    [Item::Inverter, Item::Adrenaline],
    ItemKind::Adrenaline,
    [ItemKind::Inverter]
);
dealer_priority_case!(
    dealer_prefers_magnifier_over_beer_and_saw,
    [Item::Handsaw, Item::MagnifyingGlass, Item::Beer],
    ItemKind::MagnifyingGlass,
    [ItemKind::Handsaw, ItemKind::Beer]
);
dealer_priority_case!(
    dealer_prefers_burner_over_inverter,
    [Item::Inverter, Item::Burner],
    ItemKind::Burner,
    [ItemKind::Inverter]
);
dealer_priority_case!(
    dealer_prefers_beer_over_handsaw,
    [Item::Handsaw, Item::Beer],
    ItemKind::Beer,
    [ItemKind::Handsaw]
);

#[test]
fn dealer_side_effects_follow_the_applied_item() {
    let mut state = duel(2);
    let mut events = EventBus::default();
    state.players[1].items.push(Item::Beer);
    state.players[1].items.push(Item::Handcuffs);
    dealer_use_items(&mut state, &mut events);
    assert!(state.players[1].cuffed);

    state.players[1].set_hp(1);
    state.players[1].items = vec![Item::Handsaw, Item::Beer].into();
    state.players[1].cuffed = false;
    dealer_use_items(&mut state, &mut events);
    assert_eq!(state.players[1].hp(), 2);
}

#[test]
fn dealer_ignores_items_outside_its_priority() {
    let mut state = duel(2);
    state.players[1].items.push(Item::Remote);
    state.players[1].items.push(Item::CigarettePack);
    let mut events = EventBus::default();
    assert_eq!(dealer_use_items(&mut state, &mut events), None);
    assert_eq!(state.players[1].items.len(), 2);
}

#[test]
fn shells_keep_their_type() {
    for i in 0..10 {
        let kind = if i % 2 == 0 { ShellType::Live } else { ShellType::Blank };
        assert_eq!(Shell::new(kind).kind, kind);
    }
}

#[test]
fn seeded_state_round_trips_through_json() {
    let mut state = GameState::new(vec![Player::new("Alice"), Player::new("Bob")])
        .with_shotgun(Shotgun::with_shells([Shell::live(), Shell::blank()]))
        .with_phase(Phase::Load)
        .with_seed(42);
    state.round = 2;
    state.streak = 3;
    state.bank = 8;
    state.players[0].items.push(Item::Jammer { target: 1 });
    let mut events = EventBus::default();
    state.start_round(&RulesConfig::default(), &mut events);
    state.players[1].last_revealed = Some(ShellType::Blank);
    state.next_player(&mut events);

    let body = state.to_json().expect("serialize");
    let restored = GameState::from_json(&body).expect("deserialize");
    assert_eq!(restored, state);
    assert_eq!(restored.to_json().expect("serialize again"), body);
}

#[test]
fn custom_rng_cannot_be_saved() {
    let state = duel(2).with_rng(RngSource::custom(ScriptedRng::constant(0.5)));
    assert!(matches!(state.to_json(), Err(GameError::Serialize(_))));
}

#[test]
fn take_turn_walks_two_blanks() {
    let mut state = duel(1).with_phase(Phase::Main);
    load(&mut state, &[ShellType::Blank, ShellType::Blank]);
    let mut events = EventBus::default();

    state.take_turn(state.turn(), &mut events);
    assert_eq!(state.turn(), 1);
    assert_eq!(state.shotgun.len(), 1);
    assert_eq!(state.phase, Phase::Main);

    state.take_turn(state.turn(), &mut events);
    assert_eq!(state.turn(), 0);
    assert!(state.shotgun.is_empty());
    assert_eq!(state.phase, Phase::Items);
}

#[test]
fn take_turn_on_empty_magazine_is_a_no_op() {
    let mut state = duel(2).with_phase(Phase::Main);
    let mut events = EventBus::default();
    assert_eq!(state.take_turn(0, &mut events), TurnOutcome::MagazineEmpty);
    assert_eq!(state.turn(), 0);
    assert_eq!(state.phase, Phase::Items);
    assert!(matches!(
        state.try_take_turn(0, 0, &mut events),
        Err(GameError::MagazineEmpty)
    ));
}

#[test]
fn live_shell_damages_the_chosen_target() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Live, ShellType::Live]);
    let mut events = EventBus::default();
    let outcome = state.take_turn_at(0, 1, &mut events);
    assert_eq!(
        outcome,
        TurnOutcome::Fired {
            shell: ShellType::Live,
            target: 1,
            damage: 1,
            next: 1
        }
    );
    assert_eq!(state.players[0].hp(), 2);
    assert_eq!(state.players[1].hp(), 1);
    assert!(events.drain().any(|event| matches!(
        event,
        Event::ShellFired { actor: 0, target: 1, .. }
    )));
}

#[test]
fn barrel_mod_doubles_one_live_shot() {
    let mut state = duel(4);
    load(&mut state, &[ShellType::Live, ShellType::Live]);
    state.shotgun.barrel_mod = true;
    let mut events = EventBus::default();
    state.take_turn(0, &mut events);
    assert_eq!(state.players[0].hp(), 2);
    assert!(!state.shotgun.barrel_mod);
    state.take_turn(1, &mut events);
    assert_eq!(state.players[1].hp(), 3);
}

#[test]
fn damage_never_drops_below_zero() {
    let mut state = duel(1);
    load(&mut state, &[ShellType::Live, ShellType::Live]);
    state.shotgun.barrel_mod = true;
    let mut events = EventBus::default();
    state.take_turn(0, &mut events);
    assert_eq!(state.players[0].hp(), 0);
}

#[test]
fn human_seat_spends_its_whole_bag_before_firing() {
    let mut state = duel(3);
    state.players[0].set_hp(1);
    state.players[0].items = vec![Item::CigarettePack, Item::MagnifyingGlass].into();
    load(&mut state, &[ShellType::Blank, ShellType::Live]);
    let mut events = EventBus::default();
    state.take_turn(0, &mut events);
    assert!(state.players[0].items.is_empty());
    assert_eq!(state.players[0].hp(), 2);
    assert_eq!(state.players[0].last_revealed, Some(ShellType::Blank));
}

#[test]
fn three_seats_rotate_in_order() {
    let mut state = table(3).with_phase(Phase::Main);
    load(&mut state, &[ShellType::Blank, ShellType::Blank]);
    let mut events = EventBus::default();
    state.take_turn(state.turn(), &mut events);
    assert_eq!(state.turn(), 1);
    state.take_turn(state.turn(), &mut events);
    assert_eq!(state.turn(), 2);
    state.next_player(&mut events);
    assert_eq!(state.turn(), 0);
}

#[test]
fn remote_reverses_everyone_after_the_head() {
    let mut state = table(4);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::Remote, &mut events);
    assert_eq!(state.turn_order(), &[0, 3, 2, 1]);
    state.next_player(&mut events);
    assert_eq!(state.turn(), 3);
}

#[test]
fn jammer_skips_its_target_once() {
    let mut state = table(4);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::Jammer { target: 2 }, &mut events);
    state.next_player(&mut events);
    assert_eq!(state.turn(), 1);
    state.next_player(&mut events);
    assert_eq!(state.turn(), 3);
    assert!(!state.players[2].flags.skip);
    state.next_player(&mut events);
    state.next_player(&mut events);
    assert_eq!(state.turn(), 1);
    state.next_player(&mut events);
    assert_eq!(state.turn(), 2);
}

#[test]
fn all_seats_jammed_still_settles() {
    let mut state = table(2);
    for player in &mut state.players {
        player.flags.skip = true;
    }
    let mut events = EventBus::default();
    let next = state.next_player(&mut events);
    assert_eq!(next, 1);
    assert!(state.players.iter().all(|player| !player.flags.skip));
}

#[test]
fn jammer_on_missing_seat_is_ignored() {
    let mut state = table(2);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::Jammer { target: 9 }, &mut events);
    assert!(state.players.iter().all(|player| !player.flags.skip));
}

#[test]
fn healing_items_cap_at_max() {
    let mut state = duel(2);
    let mut events = EventBus::default();
    state.players[0].set_hp(1);
    apply_item(&mut state, 0, Item::CigarettePack, &mut events);
    assert_eq!(state.players[0].hp(), 2);
    apply_item(&mut state, 0, Item::Beer, &mut events);
    assert_eq!(state.players[0].hp(), 2);
}

#[test]
fn magnifier_and_burner_read_without_consuming() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Blank, ShellType::Live]);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::MagnifyingGlass, &mut events);
    apply_item(&mut state, 0, Item::Burner, &mut events);
    assert_eq!(state.players[0].last_revealed, Some(ShellType::Blank));
    assert_eq!(state.players[0].peeked, Some(ShellType::Live));
    assert!(state.players[0].burner_used);
    assert_eq!(state.shotgun.len(), 2);
}

#[test]
fn readers_on_empty_magazine_degrade() {
    let mut state = duel(2);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::MagnifyingGlass, &mut events);
    apply_item(&mut state, 0, Item::Burner, &mut events);
    apply_item(&mut state, 0, Item::Inverter, &mut events);
    assert_eq!(state.players[0].last_revealed, None);
    assert_eq!(state.players[0].peeked, None);
    assert!(state.players[0].burner_used);
    assert!(state.players[0].inverted);
}

#[test]
fn handsaw_cuts_cuffs_at_a_cost() {
    let mut state = duel(3);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::Handsaw, &mut events);
    assert_eq!(state.players[0].hp(), 3);
    apply_item(&mut state, 0, Item::Handcuffs, &mut events);
    assert!(state.players[0].cuffed);
    apply_item(&mut state, 0, Item::Handsaw, &mut events);
    assert!(!state.players[0].cuffed);
    assert_eq!(state.players[0].hp(), 2);
}

#[test]
fn inverter_flips_the_front_shell() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Live, ShellType::Live]);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::Inverter, &mut events);
    assert_eq!(state.shotgun.front().map(|s| s.kind), Some(ShellType::Blank));
    assert_eq!(state.shotgun.back().map(|s| s.kind), Some(ShellType::Live));
    assert!(state.players[0].inverted);
}

#[test]
fn expired_medicine_follows_the_rng() {
    let mut state = GameState::new(vec![Player::with_hp("p", 3)])
        .with_rng(RngSource::custom(ScriptedRng::new(vec![0.3, 0.7])));
    state.players[0].set_hp(1);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::ExpiredMedicine, &mut events);
    assert_eq!(state.players[0].hp(), 3);
    assert_eq!(state.players[0].med_success, Some(true));
    apply_item(&mut state, 0, Item::ExpiredMedicine, &mut events);
    assert_eq!(state.players[0].hp(), 2);
    assert_eq!(state.players[0].med_success, Some(false));
}

#[test]
fn adrenaline_steals_and_spends_an_opponent_item() {
    let mut state = duel(2).with_rng(RngSource::custom(ScriptedRng::constant(0.0)));
    state.players[0].set_hp(1);
    load(&mut state, &[ShellType::Blank, ShellType::Live]);
    state.players[1].items = vec![Item::Burner, Item::Beer].into();
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::Adrenaline, &mut events);
    assert!(state.players[0].adrenaline);
    assert!(state.players[0].burner_used);
    assert_eq!(state.players[0].peeked, Some(ShellType::Live));
    assert!(state.players[0].items.is_empty());
    assert_eq!(state.players[1].items.kinds(), vec![ItemKind::Beer]);
    assert!(events.drain().any(|event| matches!(
        event,
        Event::ItemStolen { thief: 0, victim: 1, item: ItemKind::Burner }
    )));
}

#[test]
fn adrenaline_without_victims_only_sets_the_flag() {
    let mut state = duel(2);
    let mut events = EventBus::default();
    apply_item(&mut state, 0, Item::Adrenaline, &mut events);
    assert!(state.players[0].adrenaline);
    assert!(state.players[1].items.is_empty());
}

#[test]
fn use_item_at_reports_empty_slots() {
    let mut state = duel(2);
    state.players[0].items.push(Item::Handcuffs);
    let mut events = EventBus::default();
    assert!(matches!(
        state.use_item_at(0, 1, &mut events),
        Err(GameError::Inventory(InventoryError::NoItemAtSlot { slot: 1, len: 1 }))
    ));
    assert_eq!(state.use_item_at(0, 0, &mut events).ok(), Some(Item::Handcuffs));
    assert!(state.players[0].cuffed);
    assert!(matches!(
        state.use_item_at(7, 0, &mut events),
        Err(GameError::UnknownPlayer(7))
    ));
}

#[test]
fn dealer_targets_the_human_on_a_live_shell() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Live]);
    assert_eq!(dealer_choose_target(&state), 0);
    load(&mut state, &[ShellType::Blank]);
    assert_eq!(dealer_choose_target(&state), 1);
    assert_eq!(state.shotgun.len(), 1);
}

#[test]
fn three_tracked_wins_finish_the_match() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Live]);
    let mut events = EventBus::default();
    state.resolve_round(0, &mut events);
    assert_eq!(state.streak, 1);
    assert!(state.shotgun.is_empty());
    assert!(!state.finished);
    state.resolve_round(0, &mut events);
    state.resolve_round(0, &mut events);
    assert!(state.finished);
}

#[test]
fn losing_a_round_clears_streak_and_bank() {
    let mut state = duel(2);
    state.streak = 2;
    state.bank = 16;
    let mut events = EventBus::default();
    state.resolve_round(1, &mut events);
    assert_eq!(state.streak, 0);
    assert_eq!(state.bank, 0);
}

#[test]
fn double_or_nothing_banks_on_cash_out() {
    let mut state = duel(2);
    let mut events = EventBus::default();
    state.resolve_round(0, &mut events);
    assert!(!double_or_nothing(&mut state, || true, &mut events));
    assert_eq!(state.bank, 0);
    assert_eq!(state.streak, 1);

    state.resolve_round(0, &mut events);
    assert!(double_or_nothing(&mut state, || false, &mut events));
    assert_eq!(state.bank, 4);
    assert_eq!(state.streak, 0);

    state.resolve_round(1, &mut events);
    assert_eq!(state.bank, 0);
}

#[test]
fn round_winner_rules() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Live]);
    assert_eq!(state.round_winner(), None);
    state.players[1].set_hp(0);
    assert_eq!(state.round_winner(), Some(0));
    state.players[0].set_hp(0);
    assert_eq!(state.round_winner(), None);

    let mut state = duel(3);
    state.players[0].set_hp(2);
    assert_eq!(state.round_winner(), Some(1));
    state.players[1].set_hp(2);
    assert_eq!(state.round_winner(), Some(0));
}

#[test]
fn self_shot_duels_are_roughly_fair() {
    let config = RulesConfig::default();
    let mut wins = [0u32; 2];
    for game in 0..10_000u64 {
        let mut state = duel(0).with_seed(game.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut events = EventBus::default();
        state.start_round(&config, &mut events);
        let mut winner = None;
        for _ in 0..64 {
            state.take_turn(state.turn(), &mut events);
            events.drain().for_each(drop);
            winner = state.round_winner();
            if winner.is_some() {
                break;
            }
        }
        wins[winner.expect("round ends before the magazine is exhausted")] += 1;
    }
    let ratio = f64::from(wins[0]) / f64::from(wins[0] + wins[1]);
    assert!(ratio > 0.3 && ratio < 0.7, "player 0 ratio {ratio}");
}

macro_rules! item_sequence_case {
    (
        $name:ident,
        $state:expr,
        [$(($owner:expr, $item:expr)),*],
        |$s:ident, $events:ident| $check:block
    ) => {
        #[test]
        fn $name() {
            let mut $s = $state;
            let mut $events = EventBus::default();
            $(apply_item(&mut $s, $owner, $item, &mut $events);)*
            $check
        }
    };
}

fn scripted_duel(hp: u32, roll: f64) -> GameState {
    duel(hp).with_rng(RngSource::custom(ScriptedRng::constant(roll)))
}

fn stolen(events: &mut EventBus) -> Vec<(usize, usize, ItemKind)> {
    events
        .drain()
        .filter_map(|event| match event {
            Event::ItemStolen {
                thief,
                victim,
                item,
            } => Some((thief, victim, item)),
            _ => None,
        })
        .collect()
}

item_sequence_case!(
    adrenaline_chains_into_a_stolen_adrenaline,
    {
        let mut state = scripted_duel(3, 0.0);
        state.players[0].set_hp(1);
        state.players[1].items = vec![Item::Adrenaline, Item::Beer].into();
        state
    },
    [(0, Item::Adrenaline)],
    |state, events| {
        assert!(state.players[0].adrenaline);
        assert!(!state.players[1].adrenaline);
        assert!(state.players[1].items.is_empty());
        assert!(state.players[0].items.is_empty());
        assert_eq!(state.players[0].hp(), 2);
        assert_eq!(
            stolen(&mut events),
            vec![(0, 1, ItemKind::Adrenaline), (0, 1, ItemKind::Beer)]
        );
    }
);

item_sequence_case!(
    stolen_adrenaline_with_nothing_left_stops,
    {
        let mut state = scripted_duel(2, 0.0);
        state.players[1].items.push(Item::Adrenaline);
        state
    },
    [(0, Item::Adrenaline)],
    |state, events| {
        assert!(state.players[1].items.is_empty());
        assert_eq!(stolen(&mut events), vec![(0, 1, ItemKind::Adrenaline)]);
    }
);

item_sequence_case!(
    adrenaline_skips_seats_with_empty_bags,
    {
        let mut state = table(3).with_rng(RngSource::custom(ScriptedRng::constant(0.0)));
        state.players[2].items = vec![Item::Handcuffs, Item::Beer].into();
        state
    },
    [(0, Item::Adrenaline)],
    |state, events| {
        assert!(state.players[0].cuffed);
        assert_eq!(state.players[2].items.kinds(), vec![ItemKind::Beer]);
        assert_eq!(stolen(&mut events), vec![(0, 2, ItemKind::Handcuffs)]);
    }
);

item_sequence_case!(
    remote_then_jammer_skips_on_the_reversed_order,
    table(4),
    [(0, Item::Remote), (0, Item::Jammer { target: 3 })],
    |state, events| {
        assert_eq!(state.turn_order(), &[0, 3, 2, 1]);
        assert_eq!(state.next_player(&mut events), 2);
        assert!(!state.players[3].flags.skip);
        assert_eq!(state.next_player(&mut events), 1);
        assert_eq!(state.next_player(&mut events), 0);
        assert_eq!(state.next_player(&mut events), 3);
    }
);

macro_rules! legacy_save_case {
    ($name:ident, $body:expr, |$state:ident| $check:block) => {
        #[test]
        fn $name() {
            let $state = GameState::from_json($body).expect("save loads");
            $check
            let body = $state.to_json().expect("serialize");
            assert_eq!(GameState::from_json(&body).expect("reload"), $state);
        }
    };
}

legacy_save_case!(
    save_without_turn_order_gets_seat_order,
    r#"{"phase":"MAIN","round":2,"turn":1,
        "players":[{"name":"You","hp":2,"hpMax":3},{"name":"Dealer","hp":3,"hpMax":3}],
        "shotgun":{"magazine":[{"type":"BLANK"}],"barrelMod":false},
        "rng":5,"streak":1,"finished":false,"bank":0}"#,
    |state| {
        assert_eq!(state.turn_order(), &[0, 1]);
        assert_eq!(state.turn(), 1);
        assert_eq!(state.streak, 1);
    }
);

legacy_save_case!(
    save_with_null_turn_order_gets_seat_order,
    r#"{"phase":"ITEMS","round":1,"turn":0,
        "players":[{"name":"You","hp":1,"hpMax":2},{"name":"Dealer","hp":2,"hpMax":2}],
        "shotgun":{"magazine":[],"barrelMod":false},
        "rng":9,"streak":0,"finished":false,"bank":0,"turnOrder":null}"#,
    |state| {
        assert_eq!(state.turn_order(), &[0, 1]);
        assert_eq!(state.rng.seed(), Some(9));
    }
);

legacy_save_case!(
    bare_player_records_fill_in_defaults,
    r#"{"phase":"MAIN","round":1,"turn":0,
        "players":[{"hp":1,"hpMax":2},{"hp":1,"hpMax":2}],
        "shotgun":{"magazine":[{"type":"LIVE"},{"type":"BLANK"}],"barrelMod":true},
        "streak":0,"finished":false,"bank":0,"turnOrder":[0,1]}"#,
    |state| {
        for player in &state.players {
            assert!(player.items.is_empty());
            assert!(!player.flags.skip);
            assert_eq!(player.damage_boost, 1);
            assert_eq!(player.hp(), 1);
        }
        assert!(state.shotgun.barrel_mod);
        assert_eq!(state.shotgun.live_count(), 1);
        assert_eq!(state.rng.seed(), Some(0));
    }
);

#[test]
fn dealer_aims_after_its_inverter() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Blank, ShellType::Blank]);
    state.players[1].items.push(Item::Inverter);
    let mut events = EventBus::default();
    let outcome = dealer_take_turn(&mut state, &mut events);
    assert!(matches!(
        outcome,
        TurnOutcome::Fired {
            shell: ShellType::Live,
            target: 0,
            damage: 1,
            ..
        }
    ));
    assert_eq!(state.players[0].hp(), 1);
    assert_eq!(state.players[1].hp(), 2);
    assert!(state.players[1].items.is_empty());
}

#[test]
fn dealer_turn_on_empty_magazine_does_nothing() {
    let mut state = duel(2);
    state.players[1].items.push(Item::Beer);
    let mut events = EventBus::default();
    assert_eq!(dealer_take_turn(&mut state, &mut events), TurnOutcome::MagazineEmpty);
    assert_eq!(state.players[1].items.len(), 1);
}

#[test]
fn fire_uses_no_items() {
    let mut state = duel(2);
    load(&mut state, &[ShellType::Blank]);
    state.players[0].items.push(Item::Handcuffs);
    let mut events = EventBus::default();
    state.fire(0, 0, &mut events);
    assert_eq!(state.players[0].items.len(), 1);
    assert!(!state.players[0].cuffed);
}

#[test]
fn double_knockout_goes_to_the_dealer() {
    let mut state = duel(1);
    load(&mut state, &[ShellType::Live]);
    assert_eq!(state.settled_winner(), None);
    state.players[1].set_hp(0);
    assert_eq!(state.settled_winner(), Some(0));
    state.players[0].set_hp(0);
    assert_eq!(state.round_winner(), None);
    assert_eq!(state.settled_winner(), Some(1));
    assert_eq!(GameState::new(vec![Player::new("solo")]).settled_winner(), None);
}

#[test]
fn new_rounds_clear_marks_and_replace_hands() {
    let config = RulesConfig {
        items_min: 1,
        items_max: 3,
        item_pool: vec![ItemKind::Remote, ItemKind::Jammer],
        ..RulesConfig::default()
    };
    let mut state = duel(0).with_seed(11);
    let mut events = EventBus::default();
    state.start_round(&config, &mut events);
    for _ in 0..2 {
        for player in &mut state.players {
            player.cuffed = true;
            player.flags.skip = true;
            player.inverted = true;
            player.adrenaline = true;
            player.burner_used = true;
            player.damage_boost = 3;
            player.last_revealed = Some(ShellType::Live);
            player.peeked = Some(ShellType::Blank);
            player.med_success = Some(false);
        }
        state.shotgun.barrel_mod = true;
        state.next_round(&config, &mut events);
        for player in &state.players {
            assert!(!player.cuffed && !player.flags.skip && !player.inverted);
            assert!(!player.adrenaline && !player.burner_used);
            assert_eq!(player.damage_boost, 1);
            assert_eq!(player.last_revealed, None);
            assert_eq!(player.peeked, None);
            assert_eq!(player.med_success, None);
            assert!((1..=3).contains(&player.items.len()));
        }
        assert!(!state.shotgun.barrel_mod);
    }
    assert_eq!(state.round, 3);
}

#[test]
fn rounds_without_dealing_keep_held_items() {
    let mut state = duel(0).with_seed(4);
    state.players[0].items.push(Item::Remote);
    let mut events = EventBus::default();
    state.start_round(&RulesConfig::default(), &mut events);
    state.next_round(&RulesConfig::default(), &mut events);
    assert_eq!(state.players[0].items.kinds(), vec![ItemKind::Remote]);
}
