//! Seeded Nepal trail catalog.
//!
//! Hardcoded content data with a fixed schema. Coordinates are approximate
//! waypoints along each route, not surveyed GPS tracks.

use crate::geo::GeoPoint;
use crate::trail::{Difficulty, ElevationPoint, EmergencyInfo, Lodge, Review, Trail};

fn svec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn profile(samples: &[(f64, f64)]) -> Vec<ElevationPoint> {
    samples
        .iter()
        .map(|&(distance_km, elevation_m)| ElevationPoint {
            distance_km,
            elevation_m,
        })
        .collect()
}

fn route(points: &[(f64, f64)]) -> Vec<GeoPoint> {
    points.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)).collect()
}

fn lodge(name: &str, elevation_m: u32, amenities: &[&str]) -> Lodge {
    Lodge {
        name: name.to_string(),
        elevation_m,
        amenities: svec(amenities),
    }
}

fn review(id: &str, user: &str, rating: u8, date: &str, comment: &str) -> Review {
    Review {
        id: id.to_string(),
        user: user.to_string(),
        rating,
        date: date.to_string(),
        comment: comment.to_string(),
    }
}

/// All seeded trails, in canonical catalog order.
pub fn nepal_trails() -> Vec<Trail> {
    vec![
        Trail {
            id: "everest-base-camp".into(),
            name: "Everest Base Camp Trek".into(),
            region: "Khumbu / Solukhumbu".into(),
            difficulty: Difficulty::Hard,
            distance_km: 130.0,
            duration: "14 days".into(),
            elevation_gain_m: 4000,
            max_elevation_m: 5364,
            rating: 4.9,
            review_count: 3847,
            description: "The world's most iconic trek, walking in the footsteps of \
                Hillary and Tenzing to the base of the highest mountain on Earth."
                .into(),
            tags: svec(&[
                "Classic",
                "High Altitude",
                "Sherpa Culture",
                "Glaciers",
                "World Heritage",
            ]),
            start_point: "Lukla Airport (2,860m)".into(),
            end_point: "Everest Base Camp (5,364m)".into(),
            best_season: svec(&["March", "April", "May", "October", "November"]),
            permits: svec(&[
                "Sagarmatha National Park Permit (NPR 3,000)",
                "TIMS Card (NPR 2,000)",
                "Khumbu Pasang Lhamu Rural Municipality Entry Fee",
            ]),
            highlights: svec(&[
                "Kala Patthar viewpoint (5,545m) — best Everest panorama",
                "Tengboche Monastery — largest monastery in Khumbu",
                "Namche Bazaar — Sherpa capital & acclimatization hub",
                "Khumbu Icefall views from base camp",
                "Ama Dablam — \"Mother's Necklace\" peak views",
            ]),
            center: GeoPoint::new(27.9881, 86.9253),
            route: route(&[
                (27.6870, 86.7294), // Lukla
                (27.7199, 86.7136), // Phakding
                (27.8069, 86.7139), // Namche
                (27.8360, 86.7631), // Tengboche
                (27.8903, 86.8303), // Dingboche
                (27.9219, 86.8122), // Lobuche
                (27.9570, 86.8478), // Gorak Shep
                (27.9881, 86.9253), // EBC
            ]),
            elevation_profile: profile(&[
                (0.0, 2860.0),
                (9.0, 2610.0),
                (19.0, 3440.0),
                (32.0, 3870.0),
                (42.0, 4050.0),
                (55.0, 4360.0),
                (67.0, 4700.0),
                (79.0, 4940.0),
                (90.0, 5140.0),
                (100.0, 5364.0),
            ]),
            lodges: vec![
                lodge(
                    "Namche Bazaar",
                    3440,
                    &["Hot shower", "WiFi", "Charging", "Restaurant", "Medical post"],
                ),
                lodge("Tengboche", 3870, &["Monastery stay", "Hot meals", "Views"]),
                lodge("Dingboche", 4360, &["Heated dining", "Charging", "Medical kit"]),
                lodge(
                    "Gorak Shep",
                    5140,
                    &["Basic lodge", "Hot meals", "Altitude medication"],
                ),
            ],
            reviews: vec![
                review(
                    "r1",
                    "Sarah M.",
                    5,
                    "2024-11-15",
                    "Life-changing experience. The views from Kala Patthar at sunrise \
                     were worth every difficult step. Our guide Pemba was incredible — \
                     knowledgeable and very safety-conscious.",
                ),
                review(
                    "r2",
                    "James K.",
                    5,
                    "2024-10-28",
                    "Tough but absolutely doable for fit hikers. Take acclimatization \
                     seriously — spend extra days in Namche and Dingboche. The teahouses \
                     are better than expected.",
                ),
                review(
                    "r3",
                    "Yuki T.",
                    4,
                    "2024-05-02",
                    "Spectacular scenery. Got mild AMS above Lobuche but descent helped \
                     immediately. Carry Diamox as a precaution. Crowds can be intense in \
                     peak season.",
                ),
            ],
            emergency: EmergencyInfo {
                nearest_hospital: "Khunde Hospital (3,840m) — 2km from Namche".into(),
                helicopter_landing_zones: svec(&[
                    "Namche Bazaar",
                    "Pheriche",
                    "Gorak Shep",
                    "Dingboche",
                ]),
                contact: "Nepal Police: 100 | Mountain Rescue: +977-1-4411105".into(),
            },
        },
        Trail {
            id: "annapurna-circuit".into(),
            name: "Annapurna Circuit Trek".into(),
            region: "Annapurna / Gandaki".into(),
            difficulty: Difficulty::Hard,
            distance_km: 220.0,
            duration: "18 days".into(),
            elevation_gain_m: 4800,
            max_elevation_m: 5416,
            rating: 4.8,
            review_count: 2961,
            description: "One of the world's greatest treks — a full circuit around the \
                Annapurna massif crossing the dramatic Thorong La pass at 5,416m."
                .into(),
            tags: svec(&[
                "Circuit",
                "Thorong La",
                "Diverse Culture",
                "Mustang",
                "World Heritage",
            ]),
            start_point: "Besisahar (760m)".into(),
            end_point: "Nayapul / Pokhara".into(),
            best_season: svec(&["March", "April", "October", "November"]),
            permits: svec(&["ACAP Permit (NPR 3,000)", "TIMS Card (NPR 2,000)"]),
            highlights: svec(&[
                "Thorong La Pass (5,416m) — dramatic high-altitude crossing",
                "Muktinath Temple — sacred Hindu & Buddhist pilgrimage site",
                "Kali Gandaki Gorge — world's deepest gorge",
                "Manang village — traditional Tibetan-influenced culture",
                "Poon Hill detour — 360° Annapurna sunrise panorama",
            ]),
            center: GeoPoint::new(28.7059, 83.9301),
            route: route(&[
                (28.2310, 84.3760), // Besisahar
                (28.3870, 84.2650), // Chame
                (28.5420, 84.1270), // Manang
                (28.7059, 83.9301), // Thorong La
                (28.8200, 83.8720), // Muktinath
                (28.6950, 83.5810), // Jomsom
                (28.4260, 83.5870), // Tatopani
                (28.1940, 83.9740), // Nayapul
            ]),
            elevation_profile: profile(&[
                (0.0, 760.0),
                (22.0, 1430.0),
                (55.0, 2710.0),
                (85.0, 3500.0),
                (110.0, 3519.0),
                (130.0, 5416.0),
                (145.0, 3760.0),
                (165.0, 2720.0),
                (190.0, 1190.0),
                (220.0, 820.0),
            ]),
            lodges: vec![
                lodge("Chame", 2710, &["Hot shower", "WiFi", "Restaurant", "Charging"]),
                lodge(
                    "Manang",
                    3519,
                    &["Altitude clinic", "Bakery", "Cinema room", "Hot meals"],
                ),
                lodge("Muktinath", 3760, &["Temple visit", "Hot meals", "Guesthouses"]),
                lodge("Tatopani", 1190, &["Hot springs", "Restaurant", "WiFi"]),
            ],
            reviews: vec![
                review(
                    "r4",
                    "Emma R.",
                    5,
                    "2024-10-20",
                    "The diversity of this trek is unmatched. Subtropical forests to \
                     Tibetan plateau in 18 days. Thorong La crossing at sunrise was the \
                     highlight of my life.",
                ),
                review(
                    "r5",
                    "Carlos V.",
                    5,
                    "2024-04-15",
                    "Better than the EBC in my opinion — more diverse and less crowded. \
                     The Kali Gandaki gorge section is stunning. Roads have been built in \
                     parts but most trail is unchanged.",
                ),
            ],
            emergency: EmergencyInfo {
                nearest_hospital: "Manang Altitude Medical Center (3,519m)".into(),
                helicopter_landing_zones: svec(&[
                    "Manang",
                    "Muktinath",
                    "Jomsom",
                    "Tatopani",
                ]),
                contact: "Nepal Police: 100 | ACAP Office: +977-61-690190".into(),
            },
        },
        Trail {
            id: "langtang-valley".into(),
            name: "Langtang Valley Trek".into(),
            region: "Langtang / Rasuwa".into(),
            difficulty: Difficulty::Moderate,
            distance_km: 68.0,
            duration: "8 days".into(),
            elevation_gain_m: 2200,
            max_elevation_m: 4984,
            rating: 4.7,
            review_count: 1423,
            description: "The \"Valley of Glaciers\" — a hidden gem close to Kathmandu \
                offering stunning Himalayan scenery and rich Tamang culture."
                .into(),
            tags: svec(&[
                "Valley",
                "Accessible",
                "Tamang Culture",
                "Glaciers",
                "Close to Kathmandu",
            ]),
            start_point: "Syabrubesi (1,503m) — 7hrs by bus from Kathmandu".into(),
            end_point: "Kyanjin Gompa (3,870m)".into(),
            best_season: svec(&[
                "March", "April", "May", "October", "November", "December",
            ]),
            permits: svec(&[
                "Langtang National Park Fee (NPR 3,000)",
                "TIMS Card (NPR 2,000)",
            ]),
            highlights: svec(&[
                "Kyanjin Gompa — ancient Buddhist monastery",
                "Tserko Ri (4,984m) — panoramic views of Langtang Lirung",
                "Yak cheese factory visit",
                "Langtang Lirung glacier views",
                "Tamang heritage villages",
            ]),
            center: GeoPoint::new(28.2120, 85.5180),
            route: route(&[
                (28.1000, 85.2400), // Syabrubesi
                (28.1550, 85.3620), // Lama Hotel
                (28.1960, 85.5120), // Langtang Village
                (28.2120, 85.5180), // Kyanjin Gompa
            ]),
            elevation_profile: profile(&[
                (0.0, 1503.0),
                (11.0, 2380.0),
                (22.0, 3430.0),
                (34.0, 3870.0),
                (38.0, 4984.0),
            ]),
            lodges: vec![
                lodge("Lama Hotel", 2380, &["Hot shower", "Restaurant", "Charging"]),
                lodge("Langtang Village", 3430, &["Hot meals", "Bakery", "Charging"]),
                lodge(
                    "Kyanjin Gompa",
                    3870,
                    &["Cheese factory", "Hot meals", "Basic lodge", "Gompa"],
                ),
            ],
            reviews: vec![review(
                "r6",
                "Maria L.",
                5,
                "2024-11-05",
                "Perfect first Himalayan trek. Accessible, beautiful, and a great way \
                 to support the earthquake-affected communities. Tserko Ri summit was \
                 stunning.",
            )],
            emergency: EmergencyInfo {
                nearest_hospital: "Rasuwa District Hospital, Dhunche".into(),
                helicopter_landing_zones: svec(&[
                    "Kyanjin Gompa",
                    "Langtang Village",
                    "Syabrubesi",
                ]),
                contact: "Nepal Police: 100 | Park HQ: +977-10-690099".into(),
            },
        },
        Trail {
            id: "manaslu-circuit".into(),
            name: "Manaslu Circuit Trek".into(),
            region: "Gorkha / Mansiri".into(),
            difficulty: Difficulty::Expert,
            distance_km: 177.0,
            duration: "16 days".into(),
            elevation_gain_m: 5100,
            max_elevation_m: 5160,
            rating: 4.8,
            review_count: 892,
            description: "A remote and dramatic circuit around the world's 8th highest \
                mountain — wilder and less crowded than Annapurna."
                .into(),
            tags: svec(&[
                "Remote",
                "Restricted Area",
                "Larkya La",
                "Off the Beaten Path",
                "Cultural",
            ]),
            start_point: "Soti Khola (710m) via Arughat from Kathmandu".into(),
            end_point: "Dharapani — connects to Annapurna Circuit".into(),
            best_season: svec(&["March", "April", "May", "October", "November"]),
            permits: svec(&[
                "Manaslu Restricted Area Permit (USD 70/week)",
                "Manaslu Conservation Area Permit (NPR 3,000)",
                "TIMS Card — mandatory guide",
            ]),
            highlights: svec(&[
                "Larkya La Pass (5,160m) — dramatic high Himalayan crossing",
                "Tibetan Buddhist villages — Samagaon & Samdo",
                "Manaslu (8,163m) close-up views",
                "Birendra Lake — glacial lake near Samagaon",
                "Ancient Pungen Gompa monastery",
            ]),
            center: GeoPoint::new(28.5496, 84.5597),
            route: route(&[
                (28.1100, 84.6610), // Arughat
                (28.2740, 84.6410), // Jagat
                (28.3690, 84.6020), // Deng
                (28.4630, 84.5600), // Namrung
                (28.5496, 84.5597), // Larkya La
                (28.6280, 84.4720), // Bhimthang
            ]),
            elevation_profile: profile(&[
                (0.0, 610.0),
                (28.0, 1410.0),
                (55.0, 2160.0),
                (83.0, 3430.0),
                (110.0, 4460.0),
                (130.0, 5160.0),
                (145.0, 3720.0),
                (177.0, 855.0),
            ]),
            lodges: vec![
                lodge(
                    "Jagat",
                    1410,
                    &["Permit checkpoint", "Basic lodge", "Restaurant"],
                ),
                lodge("Samagaon", 3530, &["Altitude clinic", "Hot meals", "Monastery"]),
                lodge("Samdo", 3690, &["Basic lodge", "Hot meals"]),
                lodge(
                    "Larkya Phedi",
                    4460,
                    &["Basic lodge", "Hot meals", "Early start point"],
                ),
            ],
            reviews: vec![review(
                "r7",
                "David H.",
                5,
                "2024-10-30",
                "The best trek I've ever done. Fewer crowds than Annapurna but equally \
                 dramatic. Larkya La at sunrise with Manaslu glowing — I'll never \
                 forget it.",
            )],
            emergency: EmergencyInfo {
                nearest_hospital: "Samagaon Medical Post (3,530m) | Gorkha Hospital".into(),
                helicopter_landing_zones: svec(&[
                    "Samagaon",
                    "Samdo",
                    "Bhimthang",
                    "Philim",
                ]),
                contact: "Nepal Police: 100 | Manaslu Conservation: +977-64-420132".into(),
            },
        },
        Trail {
            id: "upper-mustang".into(),
            name: "Upper Mustang Trek".into(),
            region: "Mustang / Gandaki".into(),
            difficulty: Difficulty::Moderate,
            distance_km: 170.0,
            duration: "15 days".into(),
            elevation_gain_m: 2400,
            max_elevation_m: 3840,
            rating: 4.9,
            review_count: 741,
            description: "Journey to the \"Forbidden Kingdom\" — a Tibetan plateau \
                enclave with ancient cave cities, walled towns, and surreal lunar \
                landscapes."
                .into(),
            tags: svec(&[
                "Restricted Area",
                "Tibetan Culture",
                "Desert",
                "Ancient Kingdom",
                "Unique",
            ]),
            start_point: "Jomsom (2,720m) — flight from Pokhara".into(),
            end_point: "Lo Manthang (3,840m)".into(),
            best_season: svec(&["May", "June", "July", "August", "September", "October"]),
            permits: svec(&[
                "Upper Mustang Restricted Area Permit (USD 500/10 days)",
                "ACAP Permit (NPR 3,000)",
                "Mandatory licensed guide",
            ]),
            highlights: svec(&[
                "Lo Manthang — walled medieval capital of the Mustang Kingdom",
                "Ancient cave monasteries (Luri, Chungsi)",
                "Surreal lunar desert landscapes",
                "Tiji Festival (May) — masked dance festival",
                "Sky caves — prehistoric burial chambers",
            ]),
            center: GeoPoint::new(29.1910, 83.9650),
            route: route(&[
                (28.7820, 83.7200), // Jomsom
                (28.9180, 83.8290), // Kagbeni
                (29.0240, 83.9430), // Chele
                (29.1910, 83.9650), // Lo Manthang
            ]),
            elevation_profile: profile(&[
                (0.0, 2720.0),
                (10.0, 2800.0),
                (35.0, 3050.0),
                (60.0, 3640.0),
                (85.0, 3840.0),
            ]),
            lodges: vec![
                lodge("Kagbeni", 2800, &["WiFi", "Hot shower", "Permit checkpoint"]),
                lodge("Chele", 3050, &["Basic lodge", "Hot meals"]),
                lodge(
                    "Lo Manthang",
                    3840,
                    &["Guesthouses", "Restaurant", "Royal Palace visit"],
                ),
            ],
            reviews: vec![review(
                "r8",
                "Anna P.",
                5,
                "2024-06-10",
                "Worth every penny of the permit cost. Lo Manthang feels like stepping \
                 500 years into the past. The cliff monasteries are extraordinary. Go \
                 during Tiji Festival if you can.",
            )],
            emergency: EmergencyInfo {
                nearest_hospital: "Jomsom Hospital (2,720m)".into(),
                helicopter_landing_zones: svec(&["Jomsom", "Lo Manthang", "Kagbeni"]),
                contact: "Nepal Police Jomsom: +977-69-440022".into(),
            },
        },
        Trail {
            id: "gokyo-lakes".into(),
            name: "Gokyo Lakes & Ri Trek".into(),
            region: "Khumbu / Solukhumbu".into(),
            difficulty: Difficulty::Hard,
            distance_km: 70.0,
            duration: "12 days".into(),
            elevation_gain_m: 3500,
            max_elevation_m: 5357,
            rating: 4.8,
            review_count: 1156,
            description: "Turquoise sacred lakes, the world's highest freshwater lake \
                system, and a panoramic view rivaling Kala Patthar."
                .into(),
            tags: svec(&[
                "Lakes",
                "Panoramic Views",
                "Glaciers",
                "Alternative EBC",
                "High Altitude",
            ]),
            start_point: "Lukla Airport (2,860m)".into(),
            end_point: "Gokyo Village (4,750m)".into(),
            best_season: svec(&["March", "April", "May", "October", "November"]),
            permits: svec(&[
                "Sagarmatha National Park Permit (NPR 3,000)",
                "TIMS Card (NPR 2,000)",
            ]),
            highlights: svec(&[
                "Gokyo Ri (5,357m) — 4-peak panorama including Everest",
                "Gokyo Sacred Lakes — turquoise high-altitude gems",
                "Ngozumpa Glacier — Nepal's largest glacier",
                "Optional Cho La Pass crossing to EBC route",
                "Renjo La Pass (5,360m) alternative route",
            ]),
            center: GeoPoint::new(27.9616, 86.6892),
            route: route(&[
                (27.6870, 86.7294), // Lukla
                (27.7199, 86.7136), // Phakding
                (27.8069, 86.7139), // Namche
                (27.8790, 86.6520), // Dole
                (27.9040, 86.6700), // Machhermo
                (27.9616, 86.6892), // Gokyo
            ]),
            elevation_profile: profile(&[
                (0.0, 2860.0),
                (9.0, 2610.0),
                (19.0, 3440.0),
                (30.0, 4038.0),
                (40.0, 4470.0),
                (50.0, 4750.0),
                (55.0, 5357.0),
            ]),
            lodges: vec![
                lodge(
                    "Namche Bazaar",
                    3440,
                    &["Hot shower", "WiFi", "Charging", "Restaurant", "Medical post"],
                ),
                lodge(
                    "Machhermo",
                    4470,
                    &["Basic lodge", "Hot meals", "Yak herder community"],
                ),
                lodge(
                    "Gokyo",
                    4750,
                    &["Basic lodge", "Hot meals", "Lake access", "Gokyo Ri base"],
                ),
            ],
            reviews: vec![review(
                "r9",
                "Tom W.",
                5,
                "2024-11-12",
                "I preferred this to EBC — fewer people, the lakes are magical, and the \
                 Gokyo Ri view beats Kala Patthar in my opinion. Do it before it gets \
                 too popular.",
            )],
            emergency: EmergencyInfo {
                nearest_hospital: "Khunde Hospital (3,840m) | Machhermo Medical Post".into(),
                helicopter_landing_zones: svec(&["Gokyo", "Machhermo", "Namche"]),
                contact: "Nepal Police: 100 | Mountain Rescue: +977-1-4411105".into(),
            },
        },
        Trail {
            id: "poon-hill".into(),
            name: "Poon Hill Sunrise Trek".into(),
            region: "Annapurna / Myagdi".into(),
            difficulty: Difficulty::Easy,
            distance_km: 50.0,
            duration: "5 days".into(),
            elevation_gain_m: 1900,
            max_elevation_m: 3210,
            rating: 4.7,
            review_count: 4230,
            description: "Nepal's most popular short trek — stunning Annapurna sunrise \
                views accessible to all fitness levels."
                .into(),
            tags: svec(&[
                "Beginner Friendly",
                "Sunrise",
                "Annapurna Views",
                "Short Trek",
                "Family Friendly",
            ]),
            start_point: "Nayapul (1,070m) — 1.5hrs by car from Pokhara".into(),
            end_point: "Poon Hill (3,210m) / return to Nayapul".into(),
            best_season: svec(&[
                "January", "February", "March", "April", "October", "November",
                "December",
            ]),
            permits: svec(&["ACAP Permit (NPR 3,000)", "TIMS Card (NPR 2,000)"]),
            highlights: svec(&[
                "Poon Hill (3,210m) — iconic Annapurna & Dhaulagiri sunrise",
                "Rhododendron forests — spectacular in March/April",
                "Ghorepani — traditional Gurung village",
                "Machhapuchhre (Fishtail) mountain views",
                "Option to extend to Annapurna Base Camp",
            ]),
            center: GeoPoint::new(28.3996, 83.6929),
            route: route(&[
                (28.2100, 83.7870), // Nayapul
                (28.2750, 83.7430), // Tikhedhunga
                (28.3260, 83.7180), // Ghorepani
                (28.3996, 83.6929), // Poon Hill
            ]),
            elevation_profile: profile(&[
                (0.0, 1070.0),
                (7.0, 1480.0),
                (14.0, 2853.0),
                (18.0, 3210.0),
            ]),
            lodges: vec![
                lodge("Tikhedhunga", 1480, &["Hot shower", "Restaurant", "Charging"]),
                lodge(
                    "Ghorepani",
                    2853,
                    &["Hot shower", "WiFi", "Restaurant", "Good teahouses"],
                ),
            ],
            reviews: vec![
                review(
                    "r10",
                    "Lucy F.",
                    5,
                    "2024-03-22",
                    "Perfect first trek! We did it as a family with our 10-year-old. The \
                     sunrise from Poon Hill was beyond words. Trails are well-maintained \
                     and teahouses are excellent.",
                ),
                review(
                    "r11",
                    "Raj S.",
                    4,
                    "2024-11-08",
                    "Great trek, very busy in peak season. Go mid-week if you want fewer \
                     people. The rhododendron bloom in March/April is absolutely \
                     incredible.",
                ),
            ],
            emergency: EmergencyInfo {
                nearest_hospital: "Beni Hospital (40km) | Pokhara hospitals (90km)".into(),
                helicopter_landing_zones: svec(&["Ghorepani", "Tadapani"]),
                contact: "Nepal Police: 100 | ACAP Office Pokhara: +977-61-690190".into(),
            },
        },
        Trail {
            id: "mardi-himal".into(),
            name: "Mardi Himal Trek".into(),
            region: "Annapurna / Kaski".into(),
            difficulty: Difficulty::Moderate,
            distance_km: 55.0,
            duration: "7 days".into(),
            elevation_gain_m: 2800,
            max_elevation_m: 4500,
            rating: 4.6,
            review_count: 678,
            description: "A hidden gem in the Annapurna region — intimate, less-crowded \
                trail with extraordinary close-up views of Machhapuchhre and Annapurna."
                .into(),
            tags: svec(&[
                "Hidden Gem",
                "Off the Beaten Path",
                "Machhapuchhre Views",
                "Short Trek",
                "Ridge Walking",
            ]),
            start_point: "Kande (1,770m) — 45mins from Pokhara by jeep".into(),
            end_point: "Mardi Himal Base Camp (4,500m)".into(),
            best_season: svec(&[
                "February", "March", "April", "May", "October", "November",
            ]),
            permits: svec(&["ACAP Permit (NPR 3,000)", "TIMS Card (NPR 2,000)"]),
            highlights: svec(&[
                "Machhapuchhre (Fishtail) close-up views from the ridge",
                "High Camp ridge walk — 360° panorama",
                "Pristine rhododendron & bamboo forests",
                "Far fewer trekkers than Poon Hill / ABC",
                "Good option combined with ABC or Poon Hill circuit",
            ]),
            center: GeoPoint::new(28.4320, 83.9180),
            route: route(&[
                (28.2000, 83.9800), // Kande
                (28.2850, 83.9500), // Forest Camp
                (28.3620, 83.9220), // High Camp
                (28.4320, 83.9180), // Mardi Himal Base Camp
            ]),
            elevation_profile: profile(&[
                (0.0, 1770.0),
                (8.0, 2520.0),
                (18.0, 3580.0),
                (28.0, 4500.0),
            ]),
            lodges: vec![
                lodge(
                    "Forest Camp",
                    2520,
                    &["Basic lodge", "Hot meals", "Camping option"],
                ),
                lodge(
                    "High Camp",
                    3580,
                    &["Basic lodge", "Hot meals", "Panoramic views"],
                ),
            ],
            reviews: vec![review(
                "r12",
                "Finn O.",
                5,
                "2024-04-08",
                "This ridge has the most intimate mountain views I've ever experienced. \
                 Machhapuchhre looming above you is extraordinary. Do this instead of \
                 (or in addition to) Poon Hill.",
            )],
            emergency: EmergencyInfo {
                nearest_hospital: "Pokhara hospitals (1.5hrs by jeep)".into(),
                helicopter_landing_zones: svec(&["High Camp", "Sidhing village"]),
                contact: "Nepal Police: 100 | ACAP: +977-61-690190".into(),
            },
        },
    ]
}
