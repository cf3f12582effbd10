use crate::{
    algorithm::mask::ItemMask,
    algorithm::options::RandomizeOptions,
    algorithm::scoring::score_outfit,
    algorithm::selection::{
        favorites_first, filter_eligible, group_by_category, narrow_candidates, pick_candidate,
        random_target_size,
    },
    catalog::{Category, Item, availability::now_millis},
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Items chosen for one outfit, in selection order
pub type Outfit<'a> = Vec<&'a Item>;

/// An outfit paired with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedOutfit<'a> {
    /// Chosen items
    pub items: Outfit<'a>,
    /// Result of [`score_outfit`] against the options' weather
    pub score: i64,
}

/// Working state while one outfit is assembled
struct OutfitDraft<'p, 'a> {
    pool: &'p [&'a Item],
    groups: BTreeMap<Category, Vec<usize>>,
    taken: ItemMask,
    used_categories: BTreeSet<Category>,
    outfit: Outfit<'a>,
    target: usize,
}

impl<'p, 'a> OutfitDraft<'p, 'a> {
    fn new(pool: &'p [&'a Item], target: usize) -> Self {
        Self {
            pool,
            groups: group_by_category(pool),
            taken: ItemMask::new(pool.len()),
            used_categories: BTreeSet::new(),
            outfit: Vec::with_capacity(target.min(pool.len())),
            target,
        }
    }

    fn is_full(&self) -> bool {
        self.outfit.len() >= self.target
    }

    fn place(&mut self, index: usize) {
        if let Some(&item) = self.pool.get(index) {
            self.taken.insert(index);
            self.outfit.push(item);
        }
    }

    /// Choose one untaken item of `category`; returns whether anything was placed
    fn take_from<R: Rng>(
        &mut self,
        category: Category,
        options: &RandomizeOptions,
        rng: &mut R,
    ) -> bool {
        let candidates: Vec<usize> = self
            .groups
            .get(&category)
            .map(|indices| {
                indices
                    .iter()
                    .copied()
                    .filter(|&index| !self.taken.contains(index))
                    .collect()
            })
            .unwrap_or_default();

        if candidates.is_empty() {
            return false;
        }

        let narrowed = narrow_candidates(candidates, self.pool, &self.outfit, options, rng);
        let Some(index) = pick_candidate(narrowed, rng) else {
            return false;
        };

        trace!(%category, item = self.pool.get(index).map(|item| item.name.as_str()), "picked item");
        self.place(index);
        self.used_categories.insert(category);
        true
    }

    /// Seed with a top then a bottom
    fn seed_complete<R: Rng>(&mut self, options: &RandomizeOptions, rng: &mut R) {
        for category in [Category::Top, Category::Bottom] {
            if self.is_full() {
                break;
            }
            self.take_from(category, options, rng);
        }
    }

    /// One item per still-unused category, visiting categories in random order
    fn fill_by_category<R: Rng>(&mut self, options: &RandomizeOptions, rng: &mut R) {
        let mut remaining: Vec<Category> = self
            .groups
            .keys()
            .copied()
            .filter(|category| !self.used_categories.contains(category))
            .collect();
        remaining.shuffle(rng);

        for category in remaining {
            if self.is_full() {
                break;
            }
            self.take_from(category, options, rng);
        }
    }

    /// Fill from any untaken item, categoryless ones included
    fn top_up<R: Rng>(&mut self, rng: &mut R) {
        let mut leftovers = self.taken.unmarked();
        leftovers.shuffle(rng);

        for index in leftovers {
            if self.is_full() {
                break;
            }
            self.place(index);
        }
    }
}

/// Randomized outfit builder over a caller-supplied randomness source
///
/// Holds no state between calls apart from the generator, so one instance can
/// serve repeated "randomize" requests. Seed it for reproducible output.
pub struct OutfitGenerator<R: Rng = StdRng> {
    rng: R,
    clock_ms: Option<i64>,
}

impl OutfitGenerator<StdRng> {
    /// Create a deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> OutfitGenerator<R> {
    /// Wrap an existing random source
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            clock_ms: None,
        }
    }

    /// Judge hidden-until expiry against a fixed instant instead of the wall clock
    #[must_use]
    pub fn at_time(mut self, now_ms: i64) -> Self {
        self.clock_ms = Some(now_ms);
        self
    }

    fn now(&self) -> i64 {
        self.clock_ms.unwrap_or_else(now_millis)
    }

    /// Pick one outfit from `items`
    ///
    /// Filters the pool (availability, category and tag rules, weather),
    /// optionally seeds a top and a bottom, then takes one item per category
    /// in random order up to a random target size. When duplicates are
    /// allowed any leftover item can top the outfit up. The result may be
    /// shorter than the target, and is empty when nothing is eligible.
    pub fn pick<'a>(&mut self, items: &'a [Item], options: &RandomizeOptions) -> Outfit<'a> {
        let mut pool = filter_eligible(items, options, self.now());
        debug!(
            total = items.len(),
            eligible = pool.len(),
            "filtered item pool"
        );

        if pool.is_empty() {
            return Vec::new();
        }

        if options.prefer_favorites {
            favorites_first(&mut pool);
        }

        let target = random_target_size(options, &mut self.rng);
        let mut draft = OutfitDraft::new(&pool, target);
        debug!(
            target,
            categories = draft.groups.len(),
            "assembling outfit"
        );

        if options.ensure_complete_outfit {
            draft.seed_complete(options, &mut self.rng);
        }

        draft.fill_by_category(options, &mut self.rng);

        if !options.avoid_same_category && !draft.is_full() {
            draft.top_up(&mut self.rng);
        }

        debug!(chosen = draft.outfit.len(), target, "outfit assembled");
        draft.outfit
    }

    /// Pick `count` independent outfits
    pub fn generate_many<'a>(
        &mut self,
        items: &'a [Item],
        count: usize,
        options: &RandomizeOptions,
    ) -> Vec<Outfit<'a>> {
        (0..count).map(|_| self.pick(items, options)).collect()
    }

    /// Pick `count` outfits and order them best first
    ///
    /// Scores use the options' weather bucket when weather rules are on.
    /// Ties keep generation order.
    pub fn generate_ranked<'a>(
        &mut self,
        items: &'a [Item],
        count: usize,
        options: &RandomizeOptions,
    ) -> Vec<RankedOutfit<'a>> {
        self.generate_ranked_with(items, count, options, |_| {})
    }

    /// [`Self::generate_ranked`] with a callback after each generated outfit
    ///
    /// The callback receives the number of outfits generated so far.
    pub fn generate_ranked_with<'a, F: FnMut(usize)>(
        &mut self,
        items: &'a [Item],
        count: usize,
        options: &RandomizeOptions,
        mut on_generated: F,
    ) -> Vec<RankedOutfit<'a>> {
        let weather = options.active_weather();
        let mut ranked = Vec::new();

        for done in 1..=count {
            let outfit = self.pick(items, options);
            ranked.push(RankedOutfit {
                score: score_outfit(&outfit, weather),
                items: outfit,
            });
            on_generated(done);
        }

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

/// Pick one outfit using the thread-local random source
pub fn pick_random_outfit<'a>(items: &'a [Item], options: &RandomizeOptions) -> Outfit<'a> {
    OutfitGenerator::new(rand::rng()).pick(items, options)
}

/// Pick one outfit drawing randomness from `rng`
pub fn pick_random_outfit_with<'a, R: Rng>(
    items: &'a [Item],
    options: &RandomizeOptions,
    rng: &mut R,
) -> Outfit<'a> {
    OutfitGenerator::new(rng).pick(items, options)
}
