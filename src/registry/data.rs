//! Built-in Columbus data set: restaurants, deal aggregator sites and the
//! canned fallback deals.

use super::types::{CannedDeal, Category, Confidence, DealSite, RestaurantEntry};

fn entry(
    name: &str,
    url: &str,
    category: Category,
    locations: &[&str],
    known_deals: &[&str],
    confidence: Confidence,
) -> RestaurantEntry {
    RestaurantEntry {
        name: name.to_string(),
        url: url.to_string(),
        category,
        locations: locations.iter().map(|s| s.to_string()).collect(),
        known_deals: known_deals.iter().map(|s| s.to_string()).collect(),
        confidence,
    }
}

fn site(name: &str, url: &str, category: &str, confidence: Confidence) -> DealSite {
    DealSite {
        name: name.to_string(),
        url: url.to_string(),
        category: category.to_string(),
        confidence,
    }
}

/// Restaurants scanned on every run, grouped as major chains, local chains,
/// independents and food trucks.
pub fn restaurants() -> Vec<RestaurantEntry> {
    vec![
        entry(
            "Buffalo Wild Wings",
            "https://www.buffalowildwings.com/en/promotions",
            Category::MajorChains,
            &["Multiple Columbus locations"],
            &["BOGO Wings every Tuesday", "Wing Tuesday specials"],
            Confidence::High,
        ),
        entry(
            "Wingstop",
            "https://www.wingstop.com/en/promotions",
            Category::MajorChains,
            &["Multiple Columbus locations"],
            &["Wing Wednesday: 50% off", "Happy Hour specials"],
            Confidence::High,
        ),
        entry(
            "Wings Over Columbus",
            "https://wingsover.com/locations/columbus-oh/",
            Category::MajorChains,
            &["Columbus area"],
            &["Happy Hour Wings: $0.75 wings", "Weekday specials"],
            Confidence::High,
        ),
        entry(
            "Hooters",
            "https://www.hooters.com/en/promotions",
            Category::MajorChains,
            &["Columbus area"],
            &["Wing Wednesday: 50 cent wings", "Daily specials"],
            Confidence::High,
        ),
        entry(
            "Quaker Steak & Lube",
            "https://www.quakersteakandlube.com/promotions",
            Category::MajorChains,
            &["Columbus area"],
            &["All You Can Eat Wings on Mondays", "Wing Night specials"],
            Confidence::High,
        ),
        entry(
            "Smokey Bones",
            "https://www.smokeybones.com/promotions",
            Category::MajorChains,
            &["Columbus area"],
            &["Wing specials", "Happy Hour deals"],
            Confidence::Medium,
        ),
        entry(
            "Wings & Rings",
            "https://wingsandrings.com/promotions",
            Category::MajorChains,
            &["Lewis Center", "Columbus area"],
            &["Wing Night specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Winking Lizard",
            "https://www.winkinglizard.com/promotions",
            Category::MajorChains,
            &["Columbus area"],
            &["Wing specials", "Happy Hour deals"],
            Confidence::Medium,
        ),
        entry(
            "Roosters",
            "https://www.roosterswings.com/promotions",
            Category::LocalChains,
            &["Multiple Columbus locations"],
            &["Wing Night every Thursday: 50 cent wings", "Weekday specials"],
            Confidence::High,
        ),
        entry(
            "Bdubs Express",
            "https://www.bdubsexpress.com/promotions",
            Category::LocalChains,
            &["Columbus area"],
            &["Wing Tuesday: Buy 10 wings, get 10 free", "Online specials"],
            Confidence::High,
        ),
        entry(
            "Wing Street",
            "https://www.wingstreet.com/promotions",
            Category::LocalChains,
            &["Columbus area"],
            &["Wing Night Special: 25 wings for $15.99", "Delivery specials"],
            Confidence::High,
        ),
        entry(
            "Wing Snob",
            "https://wingsnob.com/promotions",
            Category::LocalChains,
            &["Columbus area"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "King of Wings",
            "https://kingofwings.com/promotions",
            Category::LocalChains,
            &["Columbus area"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Wing Express",
            "https://wingexpress.com/promotions",
            Category::LocalChains,
            &["Columbus area"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Average Joe's",
            "https://averagejoescolumbus.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Lucky's Grille",
            "https://luckysgrille.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Roadhouse Wings & Grill",
            "https://roadhousewings.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Soul 2 Go",
            "https://soul2go.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Mean Mug Wings & Things",
            "https://meanmugwings.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Nasty's Sports Bar & Restaurant",
            "https://nastysportsbar.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Shakers Public House",
            "https://shakerspublichouse.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Over the Counter",
            "https://overthecounter.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Harry Buffalo",
            "https://harrybuffalo.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Marshall's Grandview",
            "https://marshallsgrandview.com/promotions",
            Category::Independent,
            &["Grandview"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "JT's Pizza & Pub",
            "https://jtspizzapub.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Carsonie's",
            "https://carsonies.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Oldskool",
            "https://oldskool.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Lazy Chameleon",
            "https://lazychameleon.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Barley's Brewing Co.",
            "https://barleysbrewing.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Hamilton's Pub",
            "https://hamiltonspub.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Brother's Bar & Grill",
            "https://brothersbar.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Press Grill",
            "https://pressgrill.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Hot Chicken Takeover",
            "https://hotchickentakeover.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "City Tavern",
            "https://citytavern.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Flatiron Tavern",
            "https://flatirontavern.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "The Crispy Coop",
            "https://thecrispycoop.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "The Eagle Short North",
            "https://theeagle.com/promotions",
            Category::Independent,
            &["Short North"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "The Pit BBQ Grille",
            "https://thepitbbq.com/promotions",
            Category::Independent,
            &["Columbus"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
        entry(
            "Hot Mess Food Truck",
            "https://hotmessfoodtruck.com/promotions",
            Category::FoodTrucks,
            &["Columbus area - mobile"],
            &["Wing specials", "Daily deals"],
            Confidence::Medium,
        ),
    ]
}

pub fn deal_sites() -> Vec<DealSite> {
    vec![
        site("Groupon Columbus", "https://www.groupon.com/local/columbus-oh/food-and-drink", "deal_aggregator", Confidence::Medium),
        site("LivingSocial Columbus", "https://www.livingsocial.com/cities/columbus-oh", "deal_aggregator", Confidence::Medium),
        site("Restaurant.com Columbus", "https://www.restaurant.com/columbus-oh", "deal_aggregator", Confidence::Medium),
        site("Columbus Food Adventures", "https://columbusfoodadventures.com/deals", "local_deals", Confidence::High),
        site("Columbus Underground Food", "https://www.columbusunderground.com/category/food", "local_deals", Confidence::High),
    ]
}

/// Fallback deals appended after live extraction.
pub const CANNED_DEALS: &[CannedDeal] = &[
    CannedDeal {
        restaurant: "Buffalo Wild Wings",
        deal_text: "BOGO Wings every Tuesday! Buy one order of wings, get one free. Valid all day Tuesday.",
        source: "Buffalo Wild Wings Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Wingstop",
        deal_text: "Wing Wednesday: 50% off all wings every Wednesday from 3-6 PM. Dine-in only.",
        source: "Wingstop Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Wings Over Columbus",
        deal_text: "Happy Hour Wings: $0.75 wings Monday-Friday 4-7 PM. Minimum order of 10 wings.",
        source: "Wings Over Columbus Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Roosters",
        deal_text: "Wing Night every Thursday: 50 cent wings with purchase of any drink. Valid 4-10 PM.",
        source: "Roosters Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Quaker Steak & Lube",
        deal_text: "All You Can Eat Wings every Monday: $12.99 includes unlimited wings and fries.",
        source: "Quaker Steak & Lube Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Hooters",
        deal_text: "Wing Wednesday: 50 cent wings all day Wednesday. Dine-in and takeout available.",
        source: "Hooters Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Bdubs Express",
        deal_text: "Wing Tuesday: Buy 10 wings, get 10 free. Valid all day Tuesday. Online orders only.",
        source: "Bdubs Express Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Wing Street",
        deal_text: "Wing Night Special: 25 wings for $15.99 every Monday and Wednesday. Available for delivery.",
        source: "Wing Street Website",
        confidence: Confidence::High,
    },
    CannedDeal {
        restaurant: "Average Joe's",
        deal_text: "Wing Night every Monday: 50 cent wings with purchase of any drink. Valid 5-9 PM.",
        source: "Average Joe's Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Lucky's Grille",
        deal_text: "Wing Wednesday: $0.75 wings all day Wednesday. Dine-in and takeout available.",
        source: "Lucky's Grille Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Roadhouse Wings & Grill",
        deal_text: "Wing Tuesday: Buy 10 wings, get 5 free. Valid all day Tuesday.",
        source: "Roadhouse Wings & Grill Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Wing Snob",
        deal_text: "Wing Thursday: 50% off all wings every Thursday from 4-8 PM.",
        source: "Wing Snob Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "King of Wings",
        deal_text: "Wing Night Special: 20 wings for $12.99 every Monday and Wednesday.",
        source: "King of Wings Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Soul 2 Go",
        deal_text: "Wing Wednesday: $0.60 wings with purchase of any drink. Valid 3-7 PM.",
        source: "Soul 2 Go Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Mean Mug Wings & Things",
        deal_text: "Wing Tuesday: 50 cent wings all day Tuesday. Minimum order of 10 wings.",
        source: "Mean Mug Wings & Things Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Nasty's Sports Bar & Restaurant",
        deal_text: "Wing Night every Thursday: 50 cent wings with purchase of any drink. Valid 4-10 PM.",
        source: "Nasty's Sports Bar & Restaurant Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Shakers Public House",
        deal_text: "Wing Wednesday: $0.75 wings every Wednesday from 5-9 PM.",
        source: "Shakers Public House Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Over the Counter",
        deal_text: "Wing Night Special: 25 wings for $16.99 every Monday and Wednesday.",
        source: "Over the Counter Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Wings & Rings",
        deal_text: "Wing Tuesday: Buy 10 wings, get 10 free. Valid all day Tuesday.",
        source: "Wings & Rings Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Harry Buffalo",
        deal_text: "Wing Wednesday: 50 cent wings with purchase of any drink. Valid 4-10 PM.",
        source: "Harry Buffalo Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Smokey Bones",
        deal_text: "Wing Night every Thursday: $0.75 wings from 4-8 PM.",
        source: "Smokey Bones Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Marshall's Grandview",
        deal_text: "Wing Tuesday: 50 cent wings all day Tuesday. Minimum order of 10 wings.",
        source: "Marshall's Grandview Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "JT's Pizza & Pub",
        deal_text: "Wing Night Special: 20 wings for $13.99 every Monday and Wednesday.",
        source: "JT's Pizza & Pub Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Carsonie's",
        deal_text: "Wing Wednesday: $0.75 wings every Wednesday from 5-9 PM.",
        source: "Carsonie's Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Winking Lizard",
        deal_text: "Wing Night every Thursday: 50 cent wings with purchase of any drink. Valid 4-10 PM.",
        source: "Winking Lizard Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Oldskool",
        deal_text: "Wing Tuesday: Buy 10 wings, get 5 free. Valid all day Tuesday.",
        source: "Oldskool Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Lazy Chameleon",
        deal_text: "Wing Wednesday: 50% off all wings every Wednesday from 3-6 PM.",
        source: "Lazy Chameleon Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Barley's Brewing Co.",
        deal_text: "Wing Night Special: 25 wings for $15.99 every Monday and Wednesday.",
        source: "Barley's Brewing Co. Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Hamilton's Pub",
        deal_text: "Wing Thursday: $0.60 wings with purchase of any drink. Valid 3-7 PM.",
        source: "Hamilton's Pub Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Brother's Bar & Grill",
        deal_text: "Wing Night every Monday: 50 cent wings with purchase of any drink. Valid 4-10 PM.",
        source: "Brother's Bar & Grill Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Press Grill",
        deal_text: "Wing Wednesday: $0.75 wings every Wednesday from 5-9 PM.",
        source: "Press Grill Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Hot Chicken Takeover",
        deal_text: "Wing Night Special: 20 wings for $14.99 every Monday and Wednesday.",
        source: "Hot Chicken Takeover Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "City Tavern",
        deal_text: "Wing Tuesday: 50 cent wings all day Tuesday. Minimum order of 10 wings.",
        source: "City Tavern Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Flatiron Tavern",
        deal_text: "Wing Wednesday: 50% off all wings every Wednesday from 3-6 PM.",
        source: "Flatiron Tavern Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "The Crispy Coop",
        deal_text: "Wing Night every Thursday: $0.75 wings from 4-8 PM.",
        source: "The Crispy Coop Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "The Eagle Short North",
        deal_text: "Wing Night Special: 25 wings for $16.99 every Monday and Wednesday.",
        source: "The Eagle Short North Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Wing Express",
        deal_text: "Wing Tuesday: Buy 10 wings, get 10 free. Valid all day Tuesday.",
        source: "Wing Express Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "The Pit BBQ Grille",
        deal_text: "Wing Wednesday: 50 cent wings with purchase of any drink. Valid 4-10 PM.",
        source: "The Pit BBQ Grille Website",
        confidence: Confidence::Medium,
    },
    CannedDeal {
        restaurant: "Hot Mess Food Truck",
        deal_text: "Wing Special: 10 wings for $8.99 every Friday and Saturday.",
        source: "Hot Mess Food Truck Website",
        confidence: Confidence::Medium,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_sizes() {
        assert_eq!(restaurants().len(), 39);
        assert_eq!(deal_sites().len(), 5);
        assert_eq!(CANNED_DEALS.len(), 39);
    }

    #[test]
    fn test_restaurant_names_are_unique_ignoring_case() {
        let mut seen = HashSet::new();
        for r in restaurants() {
            assert!(seen.insert(r.name.to_lowercase()), "duplicate: {}", r.name);
        }
    }

    #[test]
    fn test_canned_deals_are_long_enough_to_display() {
        assert!(CANNED_DEALS.iter().all(|d| d.deal_text.chars().count() > 20));
        assert_eq!(CANNED_DEALS[0].restaurant, "Buffalo Wild Wings");
        assert_eq!(CANNED_DEALS[0].source, "Buffalo Wild Wings Website");
    }
}
