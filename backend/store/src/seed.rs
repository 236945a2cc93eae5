use crate::model::NewArticle;

/// Articles a fresh site starts with so the home feed, showcase and sidebar
/// have something to render.
pub fn sample_articles() -> Vec<NewArticle> {
    vec![
        NewArticle {
            likes: 45,
            dislikes: 3,
            views: 2100,
            read_time: 6,
            ..NewArticle::new(
                "India's EV Sales Surge 300% This Quarter",
                "Electric vehicle adoption is accelerating across Indian cities with government incentives and improved charging infrastructure driving unprecedented growth...",
                "Electric vehicle adoption is accelerating across Indian cities with government incentives and improved charging infrastructure driving unprecedented growth. The latest quarterly data shows a remarkable 300% increase in EV sales compared to the same period last year, marking a significant milestone in India's transition to sustainable transportation.",
                "car-news",
                "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300",
            )
        },
        NewArticle {
            likes: 234,
            dislikes: 8,
            views: 12500,
            read_time: 8,
            featured: true,
            ..NewArticle::new(
                "BMW 3 Series 2024: The Perfect Balance",
                "Our comprehensive review of BMW's latest 3 Series reveals a car that masterfully balances luxury with performance...",
                "Our comprehensive review of BMW's latest 3 Series reveals a car that masterfully balances luxury with performance. The 2024 model brings significant improvements in technology, comfort, and driving dynamics while maintaining the sporty character that has defined the 3 Series for decades.",
                "reviews",
                "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=450",
            )
        },
        NewArticle {
            likes: 156,
            dislikes: 5,
            views: 8300,
            read_time: 6,
            featured: true,
            ..NewArticle::new(
                "Yamaha R15 V4: Track-Ready Beast",
                "The new R15 V4 brings track-inspired performance to the streets with significant upgrades over its predecessor...",
                "The new R15 V4 brings track-inspired performance to the streets with significant upgrades over its predecessor. Yamaha has enhanced every aspect of this popular sportbike, from the engine performance to the aerodynamics, making it a formidable choice for enthusiasts.",
                "reviews",
                "https://pixabay.com/get/g13eca5815494d9f6716ae8af3f113a620890c656d1f9ff5bd7c8528db34ef966765d4e00241832e01c06ca3b5212a089a4fba7f002faca8d7826e9a0bbab3574_1280.jpg",
            )
        },
        NewArticle {
            likes: 312,
            dislikes: 12,
            views: 15700,
            read_time: 10,
            featured: true,
            ..NewArticle::new(
                "Tata Nexon EV Max: Electric Future",
                "Tata's enhanced Nexon EV Max promises longer range and better features. We put it through comprehensive testing...",
                "Tata's enhanced Nexon EV Max promises longer range and better features. We put it through comprehensive testing to see if it lives up to the expectations. The updated model addresses many of the concerns from the original version while adding new features that make it more competitive in the growing EV market.",
                "reviews",
                "https://pixabay.com/get/g3b5176dbe86fd092934f6fcbd94b6995a0372567dcf5838face43f192393b2132623b9525147dc75fd804a2bf29b4eed42f3fa0a8e4e7d665b5823a246a3509d_1280.jpg",
            )
        },
        NewArticle {
            likes: 78,
            dislikes: 2,
            views: 3400,
            ..NewArticle::new(
                "Royal Enfield Unveils New 650 Twin Series",
                "Royal Enfield expands its popular 650cc platform with three new models targeting different riding styles and preferences in the Indian market...",
                "Royal Enfield expands its popular 650cc platform with three new models targeting different riding styles and preferences in the Indian market. The new lineup includes adventure, cruiser, and sport variants, each designed to cater to specific rider preferences while maintaining the classic Royal Enfield character.",
                "bike-news",
                "https://pixabay.com/get/g430b19eb8c169ea3cd2512a980f9c8f6f948a3e7fa8a05bbcfaff7df8b681b27579143a3a0693bd59358e5b50c2b185c4851db6eaafdd1ef95baf06ee1fe945e_1280.jpg",
            )
        },
    ]
}
