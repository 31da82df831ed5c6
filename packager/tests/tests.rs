#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};

    use boxstack::entities::{
        AllowedRotation, Container, ContainerStackValue, DefaultPackResultComparator,
        PackResult, PackedContainer, Stack, StackConstraint, StackValue, Stackable,
        StackableItem,
    };
    use boxstack::geometry::ExtremePoint;
    use boxstack::util::assertions;
    use packager::config::{LaffPolicy, PackagerConfig, Strategy};
    use packager::interrupt::{Checkpoint, Interrupt};
    use packager::opt::brute_force::BruteForcePackager;
    use packager::opt::filter::filter_by_volume_and_weight;
    use packager::opt::laff::LaffPackager;
    use packager::opt::packager::{
        Adapter, Packager, StrategyAdapter, binary_search, linear_search,
    };
    use packager::opt::policy::{Candidate, CandidatePolicy, LargestArea, LargestVolume};
    use packager::opt::strategy::{Attempt, PackStrategy};
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn item(dx: u32, dy: u32, dz: u32, weight: u64, count: usize) -> StackableItem {
        let stackable = Stackable::new(dx, dy, dz, weight, AllowedRotation::ThreeD).unwrap();
        StackableItem::new(stackable, count).unwrap()
    }

    fn fixed_item(dx: u32, dy: u32, dz: u32, weight: u64, count: usize) -> StackableItem {
        let stackable = Stackable::new(dx, dy, dz, weight, AllowedRotation::None).unwrap();
        StackableItem::new(stackable, count).unwrap()
    }

    fn container(dx: u32, dy: u32, dz: u32, max_load_weight: u64) -> Container {
        Container::with_load_space(dx, dy, dz, max_load_weight).unwrap()
    }

    fn config(strategy: Strategy) -> PackagerConfig {
        PackagerConfig {
            strategy,
            ..PackagerConfig::default()
        }
    }

    /// Runs `f` with a packager of the requested strategy
    fn with_packager<T>(
        strategy: Strategy,
        containers: Vec<Container>,
        f: impl FnOnce(&dyn PackCall) -> T,
    ) -> T {
        let config = config(strategy);
        match strategy {
            Strategy::BruteForce => {
                let s = BruteForcePackager::new(&config, Arc::new(DefaultPackResultComparator));
                f(&Packager::new(containers, s, config).unwrap())
            }
            Strategy::LargestAreaFitFirst => {
                let s = LaffPackager::from_config(&config);
                f(&Packager::new(containers, s, config).unwrap())
            }
        }
    }

    /// Object-safe view on a [`Packager`] regardless of its strategy
    trait PackCall {
        fn single(&self, items: &[StackableItem]) -> anyhow::Result<Option<PackedContainer>>;
        fn list(
            &self,
            items: &[StackableItem],
            limit: usize,
        ) -> anyhow::Result<Option<Vec<PackedContainer>>>;
        fn single_interrupted(
            &self,
            items: &[StackableItem],
            interrupt: &Interrupt,
        ) -> anyhow::Result<Option<PackedContainer>>;
    }

    impl<S: PackStrategy> PackCall for Packager<S> {
        fn single(&self, items: &[StackableItem]) -> anyhow::Result<Option<PackedContainer>> {
            self.pack(items)
        }

        fn list(
            &self,
            items: &[StackableItem],
            limit: usize,
        ) -> anyhow::Result<Option<Vec<PackedContainer>>> {
            self.pack_list(items, limit)
        }

        fn single_interrupted(
            &self,
            items: &[StackableItem],
            interrupt: &Interrupt,
        ) -> anyhow::Result<Option<PackedContainer>> {
            self.pack_in(items, self.containers(), interrupt)
        }
    }

    fn assert_feasible(pc: &PackedContainer) {
        assert!(assertions::stack_is_feasible(&pc.stack, pc.stack_value()));
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn rotated_items_fill_container(strategy: Strategy) {
        init_logger();
        let items = [item(2, 1, 1, 1, 3)];
        let pc = with_packager(strategy, vec![container(3, 2, 1, 100)], |p| {
            p.single(&items).unwrap()
        })
        .expect("three 2x1x1 boxes fill a 3x2x1 container");

        assert_eq!(pc.stack.len(), 3);
        assert_eq!(pc.stack.volume(), 6);
        assert_feasible(&pc);
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn overflow_items_spread_over_two_containers(strategy: Strategy) {
        init_logger();
        let items = [
            item(1, 1, 1, 1, 2),
            item(1, 1, 1, 1, 2),
            item(1, 1, 1, 1, 2),
        ];
        let packed = with_packager(strategy, vec![container(3, 1, 1, 100)], |p| {
            p.list(&items, 5).unwrap()
        })
        .expect("six unit cubes fit in two 3x1x1 containers");

        assert_eq!(packed.len(), 2);
        let first = &packed[0].stack.placements()[0];
        assert_eq!((first.x, first.y, first.z), (0, 0, 0));
        assert_eq!(packed.iter().map(|pc| pc.stack.len()).sum::<usize>(), 6);
        packed.iter().for_each(assert_feasible);
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn oversized_item_is_infeasible(strategy: Strategy) {
        init_logger();
        let items = [item(1, 1, 1, 1, 1), item(4, 4, 4, 1, 1)];
        let containers = vec![container(3, 3, 3, 100), container(2, 5, 5, 100)];
        let (single, list) = with_packager(strategy, containers, |p| {
            (p.single(&items).unwrap(), p.list(&[items[1].clone()], 3).unwrap())
        });
        assert!(single.is_none());
        assert!(list.is_none());
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn weight_limit_is_respected(strategy: Strategy) {
        init_logger();
        let items = [item(1, 1, 1, 4, 3)];
        let (single, list) = with_packager(strategy, vec![container(3, 1, 1, 10)], |p| {
            (p.single(&items).unwrap(), p.list(&items, 3).unwrap())
        });
        assert!(single.is_none());

        let list = list.expect("two containers carry 12 units of weight");
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|pc| pc.stack.weight() <= 10));
        list.iter().for_each(assert_feasible);
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn container_limit_is_enforced(strategy: Strategy) {
        let items = [item(1, 1, 1, 1, 7)];
        let packed = with_packager(strategy, vec![container(2, 1, 1, 100)], |p| {
            (p.list(&items, 3).unwrap(), p.list(&items, 4).unwrap())
        });
        assert!(packed.0.is_none());
        assert_eq!(packed.1.map(|l| l.len()), Some(4));
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn smallest_index_fit_is_selected(strategy: Strategy) {
        // ranked best-to-worst; only the last three can hold all items
        let containers = vec![
            container(1, 1, 1, 100),
            container(2, 2, 1, 100),
            container(2, 2, 2, 2),
            container(2, 2, 2, 100),
            container(3, 3, 3, 100),
            container(4, 4, 4, 100),
        ];
        let items = [item(1, 1, 1, 1, 5)];
        let pc = with_packager(strategy, containers, |p| p.single(&items).unwrap()).unwrap();
        assert_eq!(pc.container_index, 3);
        assert_feasible(&pc);
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn rotated_container_orientation_is_used(strategy: Strategy) {
        let csvs = vec![
            ContainerStackValue::new(1, 3, 1, 100).unwrap(),
            ContainerStackValue::new(3, 1, 1, 100).unwrap(),
        ];
        let containers = vec![Container::new(csvs, 0).unwrap()];
        let items = [fixed_item(3, 1, 1, 1, 1)];
        let pc = with_packager(strategy, containers, |p| p.single(&items).unwrap()).unwrap();
        assert_eq!(pc.stack_value_index, 1);
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn tripped_interrupt_yields_no_result(strategy: Strategy) {
        let flag = Arc::new(AtomicBool::new(true));
        let items = [item(1, 2, 3, 1, 4)];
        let containers = vec![container(4, 4, 4, 100), container(5, 5, 5, 100)];

        let interrupted = Interrupt::none().or_flag(flag.clone());
        let expired = Interrupt::with_deadline(Instant::now());
        let (a, b) = with_packager(strategy, containers, |p| {
            (
                p.single_interrupted(&items, &interrupted).unwrap(),
                p.single_interrupted(&items, &expired).unwrap(),
            )
        });
        assert!(a.is_none());
        assert!(b.is_none());

        flag.store(false, Ordering::Relaxed);
        assert!(!interrupted.is_interrupted());
    }

    #[test]
    fn checkpoint_samples_every_k_steps() {
        let flag = Arc::new(AtomicBool::new(true));
        let interrupt = Interrupt::none().or_flag(flag.clone());
        let mut checkpoint = Checkpoint::new(&interrupt, 3);
        assert!(!checkpoint.check());
        assert!(!checkpoint.check());
        assert!(checkpoint.check());

        // stays tripped
        flag.store(false, Ordering::Relaxed);
        assert!(checkpoint.check());
    }

    #[test]
    fn configuration_errors_are_reported() {
        let laff = || LaffPackager::from_config(&PackagerConfig::default());
        assert!(Packager::new(vec![], laff(), PackagerConfig::default()).is_err());

        let zero_workers = PackagerConfig {
            n_workers: 0,
            ..PackagerConfig::default()
        };
        assert!(Packager::new(vec![container(1, 1, 1, 1)], laff(), zero_workers).is_err());

        let packager =
            Packager::new(vec![container(1, 1, 1, 1)], laff(), PackagerConfig::default()).unwrap();
        let items = [item(1, 1, 1, 1, 1)];
        assert!(packager.pack_in(&items, &[], &Interrupt::none()).is_err());
        assert!(packager.pack_list(&items, 0).is_err());
    }

    #[test]
    fn brute_force_rejects_overflowing_orderings() {
        // 21 distinct items: 21! orderings overflow a u64
        let items = (1..=21).map(|i| item(1, 1, i, 1, 1)).collect::<Vec<_>>();
        let result = with_packager(Strategy::BruteForce, vec![container(30, 30, 30, 1000)], |p| {
            p.single(&items)
        });
        assert!(result.is_err());
    }

    #[test]
    fn brute_force_packs_many_identical_items() {
        // 21 copies of one template have a single ordering
        let items = [item(1, 1, 1, 1, 21)];
        let pc = with_packager(Strategy::BruteForce, vec![container(3, 3, 3, 100)], |p| {
            p.single(&items).unwrap()
        })
        .expect("21 unit cubes fit in a 3x3x3 container");
        assert_eq!(pc.stack.len(), 21);
        assert_feasible(&pc);
    }

    #[test]
    fn chained_predicates_all_apply() {
        assert!(Interrupt::none().or(|| true).or(|| false).is_interrupted());
        assert!(Interrupt::none().or(|| false).or(|| true).is_interrupted());
        assert!(!Interrupt::none().or(|| false).or(|| false).is_interrupted());

        let flag = Arc::new(AtomicBool::new(false));
        let interrupt = Interrupt::none().or(|| true).or_flag(flag.clone());
        assert!(interrupt.is_interrupted());
        let interrupt = Interrupt::none().or_flag(flag.clone()).or(|| false);
        assert!(!interrupt.is_interrupted());
        flag.store(true, Ordering::Relaxed);
        assert!(interrupt.is_interrupted());

        // the deadline survives added predicates
        let expired = Interrupt::with_deadline(Instant::now()).or(|| false);
        assert!(expired.is_interrupted());
        let pending = Interrupt::with_time_limit(Duration::from_secs(3600)).or(|| false);
        assert!(!pending.is_interrupted());
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn weightless_items_fill_weightless_container(strategy: Strategy) {
        // a single level of four weightless cubes, with no load weight to spare
        let items = [item(1, 1, 1, 0, 4)];
        let pc = with_packager(strategy, vec![container(2, 2, 1, 0)], |p| {
            p.single(&items).unwrap()
        })
        .expect("weightless cubes fit a container carrying no weight");
        assert_eq!(pc.stack.len(), 4);
        assert_eq!(pc.stack.weight(), 0);
        assert_feasible(&pc);
    }

    #[test]
    fn largest_volume_policy_prefers_volume_within_level() {
        let point = ExtremePoint::new(0, 0, 0, 4, 4, 5);
        let flat = fixed_item(2, 2, 1, 1, 1).stackable;
        let tall = fixed_item(1, 1, 5, 1, 1).stackable;
        let (flat_value, tall_value) = (flat.stack_values()[0], tall.stack_values()[0]);
        let flat = Candidate {
            stackable: &flat,
            value: &flat_value,
            point: &point,
        };
        let tall = Candidate {
            stackable: &tall,
            value: &tall_value,
            point: &point,
        };

        // footprint 4 against 1, volume 4 against 5
        assert!(!LargestArea.better_next(&flat, &tall));
        assert!(LargestVolume.better_next(&flat, &tall));
        assert!(!LargestVolume.better_next(&tall, &flat));
        // levels are opened by footprint under both policies
        assert!(!LargestVolume.better_first(&flat, &tall));
        assert!(LargestVolume.better_first(&tall, &flat));
    }

    #[test]
    fn largest_volume_laff_fills_container() {
        init_logger();
        let config = PackagerConfig {
            laff_policy: LaffPolicy::LargestVolume,
            ..config(Strategy::LargestAreaFitFirst)
        };
        let items = [item(2, 2, 2, 1, 2), item(2, 2, 1, 1, 4)];
        let strategy = LaffPackager::from_config(&config);
        let packager = Packager::new(vec![container(4, 4, 2, 100)], strategy, config).unwrap();
        let pc = packager
            .pack(&items)
            .unwrap()
            .expect("two cubes and four slabs fill a 4x4x2 container");

        assert_eq!(pc.stack.len(), 6);
        assert_eq!(pc.stack.volume(), 32);
        // the cubes outweigh the slabs in volume and are placed first
        let first_two = &pc.stack.placements()[..2];
        assert!(first_two.iter().all(|p| p.item_index == 0));
        assert_feasible(&pc);
    }

    #[test]
    fn laff_limits_follow_remaining_templates() {
        init_logger();
        // the unit cubes set the smallest area and volume and are used up in the first level,
        // the second level only holds the 1x2x2 columns
        let items = [
            fixed_item(2, 2, 1, 1, 1),
            fixed_item(1, 1, 1, 1, 2),
            fixed_item(1, 2, 2, 1, 2),
        ];
        let containers = vec![container(3, 2, 3, 100)];
        let pc = with_packager(Strategy::LargestAreaFitFirst, containers, |p| {
            p.single(&items).unwrap()
        })
        .expect("the first level holds the slab and the cubes, the second the columns");

        assert_eq!(pc.stack.len(), 5);
        for p in pc.stack.placements() {
            let expected_z = if p.item_index == 2 { 1 } else { 0 };
            assert_eq!(p.z, expected_z);
        }
        assert_feasible(&pc);
    }

    fn brute_force(n_workers: usize, checkpoints_per_deadline_check: usize) -> BruteForcePackager {
        let config = PackagerConfig {
            strategy: Strategy::BruteForce,
            n_workers,
            checkpoints_per_deadline_check,
            ..PackagerConfig::default()
        };
        BruteForcePackager::new(&config, Arc::new(DefaultPackResultComparator))
    }

    #[test]
    fn interrupted_brute_force_keeps_partial_result() {
        let items = [item(1, 1, 1, 1, 5)];
        let counts = [5];
        let c = container(5, 1, 1, 100);
        let attempt = Attempt {
            items: &items,
            counts: &counts,
            container_index: 0,
            container: &c,
            stack_value_index: 0,
        };
        // the interrupt is sampled on the third step, after one cube was placed
        let interrupt = Interrupt::none().or(|| true);
        let result = brute_force(1, 3)
            .pack(&attempt, &interrupt)
            .unwrap()
            .expect("an interrupted search reports its best stack");

        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.remaining_count(), 4);
        assert!(!result.contains_last_stackable());
    }

    #[test]
    fn raised_done_flag_stops_every_worker() {
        let items = [
            fixed_item(1, 1, 1, 1, 1),
            fixed_item(1, 1, 2, 1, 1),
            fixed_item(1, 2, 2, 1, 1),
        ];
        let counts = [1, 1, 1];
        let c = container(4, 4, 4, 100);
        let attempt = Attempt {
            items: &items,
            counts: &counts,
            container_index: 0,
            container: &c,
            stack_value_index: 0,
        };
        let packager = brute_force(4, 64);

        // raised by a sibling before the search starts: each worker stops at its first step
        let done = AtomicBool::new(true);
        let search = packager.search(&attempt, &Interrupt::none(), &done).unwrap();
        assert!(search.n_steps <= 4);
        assert!(search.result.is_empty());

        // the worker completing the stack raises the flag
        let done = AtomicBool::new(false);
        let search = packager.search(&attempt, &Interrupt::none(), &done).unwrap();
        assert!(done.load(Ordering::Relaxed));
        assert!(search.result.contains_last_stackable());
        assert_eq!(search.result.placed_count(), 3);
    }

    /// Nothing may be stacked on top of another item, and items heavier than 5 are refused
    #[derive(Debug)]
    struct FloorOnly;

    impl StackConstraint for FloorOnly {
        fn can_accept(&self, stackable: &Stackable) -> bool {
            stackable.weight <= 5
        }

        fn accepts(&self, _stack: &Stack, _stackable: &Stackable) -> bool {
            true
        }

        fn supports(
            &self,
            _stack: &Stack,
            _stackable: &Stackable,
            _value: &StackValue,
            _x: u32,
            _y: u32,
            z: u32,
        ) -> bool {
            z == 0
        }
    }

    fn floor_only_container(dx: u32, dy: u32, dz: u32) -> Container {
        let csv = ContainerStackValue::new(dx, dy, dz, 100)
            .unwrap()
            .with_constraint(Arc::new(FloorOnly));
        Container::new(vec![csv], 0).unwrap()
    }

    #[test_case(Strategy::BruteForce; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst; "laff")]
    fn constraint_is_consulted(strategy: Strategy) {
        let cubes = [fixed_item(1, 1, 1, 1, 2)];
        let (single, list) = with_packager(strategy, vec![floor_only_container(1, 1, 2)], |p| {
            (p.single(&cubes).unwrap(), p.list(&cubes, 2).unwrap())
        });
        assert!(single.is_none());
        let list = list.unwrap();
        assert_eq!(list.len(), 2);
        assert!(
            list.iter()
                .flat_map(|pc| pc.stack.placements())
                .all(|p| p.z == 0)
        );

        let heavy = [fixed_item(1, 1, 1, 6, 1)];
        let single = with_packager(strategy, vec![floor_only_container(2, 2, 2)], |p| {
            p.single(&heavy).unwrap()
        });
        assert!(single.is_none());
    }

    fn random_instance(rng: &mut SmallRng) -> (Vec<StackableItem>, Vec<Container>) {
        let items = (0..rng.random_range(1..=3))
            .map(|_| {
                item(
                    rng.random_range(1..=3),
                    rng.random_range(1..=3),
                    rng.random_range(1..=3),
                    rng.random_range(1..=5),
                    rng.random_range(1..=2),
                )
            })
            .collect();
        let containers = (0..rng.random_range(3..=7))
            .map(|_| {
                container(
                    rng.random_range(2..=6),
                    rng.random_range(2..=6),
                    rng.random_range(1..=4),
                    rng.random_range(5..=40),
                )
            })
            .collect();
        (items, containers)
    }

    #[test_case(Strategy::BruteForce, 0; "brute force")]
    #[test_case(Strategy::LargestAreaFitFirst, 1; "laff")]
    fn binary_search_matches_linear_scan(strategy: Strategy, seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = config(strategy);
        let laff = LaffPackager::from_config(&config);
        let brute_force = BruteForcePackager::new(&config, Arc::new(DefaultPackResultComparator));

        for _ in 0..25 {
            let (items, containers) = random_instance(&mut rng);
            let (bisected, scanned) = match strategy {
                Strategy::BruteForce => both_searches(&brute_force, &items, &containers),
                Strategy::LargestAreaFitFirst => both_searches(&laff, &items, &containers),
            };
            assert_eq!(
                bisected.as_ref().map(|pc| pc.container_index),
                scanned.as_ref().map(|pc| pc.container_index)
            );
            if let Some(pc) = &bisected {
                assert_feasible(pc);
                assert_eq!(pc.stack.len(), items.iter().map(|i| i.count).sum::<usize>());
            }
        }
    }

    fn both_searches(
        strategy: &impl PackStrategy,
        items: &[StackableItem],
        containers: &[Container],
    ) -> (Option<PackedContainer>, Option<PackedContainer>) {
        let interrupt = Interrupt::none();
        let counts = items.iter().map(|i| i.count).collect::<Vec<_>>();
        let candidates = filter_by_volume_and_weight(items, &counts, containers, 1);
        let comparator = DefaultPackResultComparator;
        let adapter = |c: Vec<usize>| {
            StrategyAdapter::new(strategy, &comparator, items, containers, c, &interrupt)
        };
        let bisected = binary_search(&mut adapter(candidates.clone()), &interrupt).unwrap();
        let scanned = linear_search(&mut adapter(candidates), &interrupt).unwrap();
        (bisected, scanned)
    }

    /// Adapter with predetermined outcomes, recording the tried candidates
    struct FixedAdapter {
        fits: Vec<bool>,
        tried: Vec<usize>,
    }

    impl Adapter for FixedAdapter {
        fn n_candidates(&self) -> usize {
            self.fits.len()
        }

        fn attempt(&mut self, index: usize) -> anyhow::Result<Option<PackResult>> {
            self.tried.push(index);
            let csv = ContainerStackValue::new(1, 1, 1, 1)?;
            let remaining = vec![if self.fits[index] { 0 } else { 1 }];
            Ok(Some(PackResult::new(index, 0, &csv, Stack::new(), remaining)))
        }

        fn accept(&mut self, result: PackResult) -> PackedContainer {
            PackedContainer {
                container_index: result.container_index,
                container: container(1, 1, 1, 1),
                stack_value_index: 0,
                stack: result.stack,
            }
        }
    }

    #[test_case(&[false, false, false, true, true, true, true]; "monotone")]
    #[test_case(&[false, true, false, false, true, true, false]; "not monotone")]
    #[test_case(&[true, false, false, false, false]; "first only")]
    #[test_case(&[false, false, false, false, true]; "last only")]
    #[test_case(&[false, false, false, false]; "none")]
    fn bisection_finds_first_fit(fits: &[bool]) {
        let mut adapter = FixedAdapter {
            fits: fits.to_vec(),
            tried: vec![],
        };
        let found = binary_search(&mut adapter, &Interrupt::none()).unwrap();
        assert_eq!(
            found.map(|pc| pc.container_index),
            fits.iter().position(|&f| f)
        );

        // no candidate is ever tried twice
        let mut tried = adapter.tried.clone();
        tried.sort();
        tried.dedup();
        assert_eq!(tried.len(), adapter.tried.len());
    }

    #[test]
    fn filter_prunes_by_volume_weight_and_loadability() {
        let items = [item(2, 2, 2, 3, 2), item(1, 1, 1, 1, 1)];
        let counts = [2, 1];
        let containers = vec![
            container(2, 2, 4, 100), // volume 16 < 17
            container(3, 3, 3, 100),
            container(3, 3, 3, 6),   // too light
            container(1, 1, 27, 100), // cannot load the large item
        ];
        assert_eq!(filter_by_volume_and_weight(&items, &counts, &containers, 1), vec![1]);
        assert_eq!(
            filter_by_volume_and_weight(&items, &counts, &containers, 2),
            vec![0, 1, 2, 3]
        );

        let tiny = vec![container(1, 1, 1, 100)];
        assert!(filter_by_volume_and_weight(&items, &counts, &tiny, 2).is_empty());
    }
}
