//! Product review generation.
//!
//! The star distribution is a function of the product's nominal rating, so
//! generated reviews stay consistent with the displayed average: a 4.8-star
//! product gets mostly 5-star reviews, a 3.6-star product a much flatter
//! spread. Four tiers are generated (5 down to 2 stars); 1-star reviews are
//! never synthesized. The goal is a review set that looks organically
//! distributed rather than uniformly random.

use chrono::{Days, NaiveDate};
use clementine_core::{DetailedReview, Product, ProductCategory, ReviewId};

use crate::catalog::{FIRST_NAMES, LAST_INITIALS};
use crate::identity::{seed_for_str, to_base36};
use crate::seeded;

const REVIEW_STRIDE: u64 = 49_979_687;

/// Percentage weights for the `[5, 4, 3, 2]` star tiers, keyed off the
/// nominal rating.
const fn tier_weights(rating: f32) -> [u64; 4] {
    if rating >= 4.5 {
        [62, 25, 9, 4]
    } else if rating >= 4.0 {
        [45, 31, 16, 8]
    } else if rating >= 3.5 {
        [30, 33, 22, 15]
    } else {
        [20, 30, 30, 20]
    }
}

/// `helpful` vote ceilings per tier; higher-rated reviews accumulate more
/// helpful votes.
const HELPFUL_RANGE: [(u64, u64); 4] = [(12, 150), (8, 90), (2, 40), (0, 22)];

/// Probability that a review in each tier is from a verified purchase.
const VERIFIED_P: [f64; 4] = [0.85, 0.8, 0.7, 0.6];

/// A `(title, comment)` review template.
type Template = (&'static str, &'static str);

/// Tier-major template pools: `[5-star, 4-star, 3-star, 2-star]` per
/// category.
const ELECTRONICS: [&[Template]; 4] = [
    &[
        ("Exceeded every expectation", "Setup took minutes and the build quality is outstanding. Battery life is even better than advertised."),
        ("Best purchase this year", "The sound and finish feel far above this price point. It has become part of my daily routine."),
        ("Flawless so far", "Three months in with heavy daily use and not a single glitch. Firmware updates have only made it better."),
    ],
    &[
        ("Very solid, minor gripes", "Works exactly as described. The companion app is a little clunky, but the hardware itself is excellent."),
        ("Great value", "Not quite flagship quality, but for the price the performance is genuinely impressive."),
        ("Happy with it", "Does everything I need. Charging could be faster, which is the only reason it loses a star."),
    ],
    &[
        ("Decent, not amazing", "It does the job, but the materials feel cheaper than the photos suggest. Fine as a backup."),
        ("Middle of the road", "Performance is acceptable, though connectivity occasionally drops and needs a re-pair."),
    ],
    &[
        ("Disappointed", "Stopped holding a charge after a few weeks. Support was responsive but the replacement has the same issue."),
        ("Not worth it for me", "Spec sheet looks great on paper, but the real-world experience is laggy and frustrating."),
    ],
];

const FASHION: [&[Template]; 4] = [
    &[
        ("Perfect fit and finish", "True to size, and the stitching is immaculate. I've already ordered a second one in another color."),
        ("Compliments every time", "The cut is flattering and the fabric drapes beautifully. Washes well with no fading."),
        ("My new favorite", "Feels custom-made. The material is soft but holds its shape all day."),
    ],
    &[
        ("Lovely, slightly roomy", "Beautiful piece. Runs about half a size large, so consider sizing down."),
        ("Great staple", "Good weight to the fabric and the color matches the listing. Seams could be cleaner inside."),
        ("Would buy again", "Comfortable and stylish. Lost one star because the color is a shade darker than pictured."),
    ],
    &[
        ("Okay for the price", "Looks fine from a distance, but the fabric is thinner than expected. Reasonable as a casual option."),
        ("Mixed feelings", "The fit is good, but after two washes the material started pilling."),
    ],
    &[
        ("Ran very small", "The sizing chart is way off. Returning for a refund, which at least was painless."),
        ("Quality didn't hold up", "A seam came loose within a week of normal wear. Expected better at this price."),
    ],
];

const HOME_GARDEN: [&[Template]; 4] = [
    &[
        ("Transformed the room", "Exactly the look I wanted, and the quality feels like double the price. Packaging was immaculate."),
        ("Sturdy and gorgeous", "Solid construction, no wobble, and the finish is rich in person. Assembly took ten minutes."),
        ("Heirloom quality", "This is the kind of piece you keep for decades. Heavy, well-made, and beautiful."),
    ],
    &[
        ("Very happy overall", "Looks great and works as promised. One corner arrived slightly scuffed, but it's barely visible."),
        ("Good everyday choice", "Functional and attractive. Instructions were confusing, though everything fit together in the end."),
        ("Does the job well", "Holds up to daily use. A little smaller than I pictured, so check the dimensions twice."),
    ],
    &[
        ("Adequate", "Serves its purpose, but the materials are lighter-weight than the photos imply."),
        ("Fine, with caveats", "Works as described, though the finish scratches easily. Handle with care."),
    ],
    &[
        ("Arrived damaged", "The box was intact but the item inside was cracked. The replacement process took weeks."),
        ("Below expectations", "Wobbles no matter how I adjust it, and the coating started peeling within a month."),
    ],
];

const SPORTS: [&[Template]; 4] = [
    &[
        ("Game changer", "Noticeable difference in my training from week one. Durable, comfortable, and easy to clean."),
        ("Built to last", "Months of hard sessions and it still looks new. Grip and cushioning are excellent."),
        ("Top of its class", "I've tried cheaper versions and this is in a different league. Worth every cent."),
    ],
    &[
        ("Solid gear", "Performs well in daily workouts. The strap wears faster than the rest, but overall very good."),
        ("Reliable choice", "Comfortable and well-made. Sizing runs slightly narrow for wide feet."),
        ("Good value", "Does everything the premium brands do at two-thirds of the price."),
    ],
    &[
        ("Gets the job done", "Acceptable for casual use, but serious training exposes the thin padding."),
        ("Average", "Fine for beginners. The material has a strong smell out of the box that takes days to fade."),
    ],
    &[
        ("Fell apart quickly", "The stitching gave out after a few weeks of normal use. Not built for real training."),
        ("Returned it", "Uncomfortable from day one and the sizing is inconsistent with the chart."),
    ],
];

const GENERIC: [&[Template]; 4] = [
    &[
        ("Absolutely delighted", "Arrived early, beautifully packaged, and the quality is exceptional. Five stars without hesitation."),
        ("Couldn't ask for more", "Exactly as described and better in person. This shop has earned a repeat customer."),
    ],
    &[
        ("Very good overall", "Minor imperfections if you look closely, but excellent quality for the price."),
        ("Recommended", "Fast shipping and the product matches the listing. One small flaw keeps it from five stars."),
    ],
    &[
        ("It's fine", "Matches the description, more or less. Nothing special, nothing terrible."),
        ("Average experience", "The product is okay, but delivery took longer than promised."),
    ],
    &[
        ("Not as described", "The listing oversells it. What arrived feels like a cheaper version of the photos."),
        ("Wouldn't repurchase", "Functional, barely, but the quality issues add up quickly."),
    ],
];

const fn pools_for(category: ProductCategory) -> &'static [&'static [Template]; 4] {
    match category {
        ProductCategory::Electronics => &ELECTRONICS,
        ProductCategory::Fashion => &FASHION,
        ProductCategory::HomeGarden => &HOME_GARDEN,
        ProductCategory::Sports => &SPORTS,
        ProductCategory::Other => &GENERIC,
    }
}

/// Map a percentage roll to a tier index (`0` = 5-star ... `3` = 2-star).
fn tier_for(roll: u64, weights: [u64; 4]) -> usize {
    let mut cumulative = 0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return index;
        }
    }
    3
}

/// Generate exactly `count` reviews for a product.
///
/// Seeded per `(product, index)`, so the same product always yields the same
/// review set. Output is sorted by helpful votes, descending.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::indexing_slicing)]
pub fn reviews(product: &Product, count: usize, today: NaiveDate) -> Vec<DetailedReview> {
    let seed = seed_for_str(product.id.as_str());
    let weights = tier_weights(product.rating);
    let pools = pools_for(product.category);

    let mut reviews: Vec<DetailedReview> = (0..count)
        .map(|index| {
            let base = seed.wrapping_add((index as u64 + 1).wrapping_mul(REVIEW_STRIDE));

            let tier = tier_for(seeded::range(base, 0, 99), weights);
            let (title, comment) = seeded::pick(base + 1, pools[tier]);

            let first = seeded::pick(base + 2, FIRST_NAMES);
            let initial = seeded::pick(base + 3, LAST_INITIALS);

            let (helpful_lo, helpful_hi) = HELPFUL_RANGE[tier];
            let helpful = seeded::range(base + 4, helpful_lo, helpful_hi) as u32;
            let not_helpful = seeded::range(base + 5, 0, u64::from(helpful) / 4 + 2) as u32;

            let age_days = seeded::range(base + 6, 1, 365);

            DetailedReview {
                id: ReviewId::new(format!("rev-{}", to_base36(base))),
                author: format!("{first} {initial}."),
                avatar: format!("https://avatars.clementine.shop/{}.png", to_base36(base + 7)),
                rating: (5 - tier) as u8,
                date: today.checked_sub_days(Days::new(age_days)).unwrap_or(today),
                title: (*title).to_string(),
                comment: (*comment).to_string(),
                helpful,
                not_helpful,
                verified: seeded::chance(base + 8, VERIFIED_P[tier]),
            }
        })
        .collect();

    reviews.sort_by(|a, b| b.helpful.cmp(&a.helpful));
    reviews
}
