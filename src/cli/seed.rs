use akkor::config::Config;
use akkor_shared::{booking::BookingStatus, page::PageRequest, user::Role};
use anyhow::Result;
use time::Duration;

const PASSWORD: &str = "password123";

const USERS: [(&str, &str, Role); 4] = [
    ("admin", "admin@akkor.localhost", Role::Admin),
    ("employee", "employee@akkor.localhost", Role::Employee),
    ("john", "john@akkor.localhost", Role::User),
    ("jane", "jane@akkor.localhost", Role::User),
];

const HOTELS: [(&str, &str, &str, &[&str]); 12] = [
    (
        "Le Grand Paris",
        "Paris, France",
        "In the heart of Paris facing the Eiffel Tower, with a spa, a gastronomic restaurant and a 24/7 concierge.",
        &[
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=800",
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
        ],
    ),
    (
        "Akkor Palace",
        "Nice, France",
        "Five-star palace on the Promenade des Anglais with an infinity pool, a private beach and a panoramic view of the Mediterranean.",
        &[
            "https://images.unsplash.com/photo-1582719508461-905c673771fd?w=800",
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=800",
        ],
    ),
    (
        "Mountain Lodge",
        "Chamonix, France",
        "Authentic chalet facing the Mont Blanc, for skiing in winter and hiking in summer. Sauna and jacuzzi overlooking the Alps.",
        &[
            "https://images.unsplash.com/photo-1601918774946-25832a4be0d6?w=800",
        ],
    ),
    (
        "The London Royal",
        "London, United Kingdom",
        "Historic hotel in Westminster with Victorian rooms, traditional afternoon tea and Big Ben around the corner.",
        &[
            "https://images.unsplash.com/photo-1455587734955-081b22074882?w=800",
            "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=800",
        ],
    ),
    (
        "Barcelona Beach Resort",
        "Barcelona, Spain",
        "Modern seafront resort on the Barceloneta with a rooftop bar and pool, a short walk from La Rambla.",
        &[
            "https://images.unsplash.com/photo-1571896349842-33c89424de2d?w=800",
        ],
    ),
    (
        "Amsterdam Canal House",
        "Amsterdam, Netherlands",
        "Boutique hotel in a 17th century canal house in the Jordaan, with an organic breakfast and bikes to explore the city.",
        &[
            "https://images.unsplash.com/photo-1596394516093-501ba68a0ba6?w=800",
        ],
    ),
    (
        "Roma Antica",
        "Rome, Italy",
        "Charming hotel next to the Colosseum with a rooftop terrace, refined Italian cooking and an exceptional wine cellar.",
        &[
            "https://images.unsplash.com/photo-1445019980597-93fa8acb246c?w=800",
            "https://images.unsplash.com/photo-1564501049412-61c2a3083791?w=800",
        ],
    ),
    (
        "Berlin Mitte Hotel",
        "Berlin, Germany",
        "Contemporary Bauhaus hotel in Mitte with an in-house art gallery, close to the Brandenburg Gate and Museum Island.",
        &[
            "https://images.unsplash.com/photo-1618773928121-c32242e63f39?w=800",
        ],
    ),
    (
        "Santorini Sunset Villa",
        "Santorini, Greece",
        "Luxury villa on the cliffs of Oia with a private pool and the best sunset on the island. Boat transfer included.",
        &[
            "https://images.unsplash.com/photo-1602002418082-a4443e081dd1?w=800",
            "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=800",
        ],
    ),
    (
        "Tokyo Sky Tower Hotel",
        "Tokyo, Japan",
        "Futuristic hotel in Shinjuku with rooms facing Mount Fuji and a traditional onsen on the top floor.",
        &[
            "https://images.unsplash.com/photo-1590490360182-c33d57733427?w=800",
        ],
    ),
    (
        "New York Central Park Hotel",
        "New York, USA",
        "Iconic Fifth Avenue hotel facing Central Park, with spacious suites and a rooftop bar over the Manhattan skyline.",
        &[
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=800",
        ],
    ),
    (
        "Dubai Marina Luxury",
        "Dubai, UAE",
        "Ultra-luxury resort on Dubai Marina with private pool suites, a personal butler and a view over Palm Jumeirah.",
        &[
            "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?w=800",
        ],
    ),
];

/// Fills an empty database with demo accounts, hotels and bookings.
/// Accounts that already exist are left alone, and hotels are only added
/// when there are none yet.
pub async fn seed(config: &Config) -> Result<()> {
    let state =
        akkor::db::create_state(&config.database.url, config.database.max_connections).await?;
    akkor::db::migrate(&state.write_db).await?;

    let user_command = akkor_user::Command::new(state.clone());
    let user_query = akkor_user::Query::new(state.clone());
    let hotel_command = akkor_hotel::Command::new(state.clone());
    let hotel_query = akkor_hotel::Query::new(state.clone());
    let booking_command = akkor_booking::Command::new(state.clone());

    let mut actors = vec![];

    for (pseudo, email, role) in USERS {
        let user = match user_query.find_by_email(email).await? {
            Some(user) => user,
            None => {
                let id = user_command
                    .create(
                        akkor_user::RegisterInput {
                            pseudo: pseudo.to_owned(),
                            email: email.to_owned(),
                            password: PASSWORD.to_owned(),
                        },
                        role,
                    )
                    .await?;

                tracing::info!(user_id = id, email, %role, "Seeded user");

                match user_query.find(id).await? {
                    Some(user) => user,
                    None => anyhow::bail!("seeded user {email} vanished"),
                }
            }
        };

        actors.push(user.actor());
    }

    let existing = hotel_query
        .filter(akkor_hotel::FilterQuery {
            page: PageRequest {
                page: 1,
                per_page: 1,
            },
            ..Default::default()
        })
        .await?;

    if existing.meta.total > 0 {
        tracing::info!(hotels = existing.meta.total, "Hotels already present, skipping");
        return Ok(());
    }

    let admin = actors[0];
    let mut hotel_ids = vec![];

    for (name, location, description, pictures) in HOTELS {
        let id = hotel_command
            .create(
                &admin,
                akkor_hotel::CreateInput {
                    name: name.to_owned(),
                    location: location.to_owned(),
                    description: description.to_owned(),
                    picture_list: pictures.iter().map(|p| (*p).to_owned()).collect(),
                },
            )
            .await?;

        tracing::info!(hotel_id = id, name, "Seeded hotel");
        hotel_ids.push(id);
    }

    let today = akkor_shared::today();
    let stays = [
        (actors[2], hotel_ids[0], 7, 10, None),
        (actors[2], hotel_ids[2], 30, 35, Some(BookingStatus::Pending)),
        (actors[3], hotel_ids[1], 14, 16, None),
        (actors[3], hotel_ids[4], 60, 67, Some(BookingStatus::Cancelled)),
    ];

    for (actor, hotel_id, from, to, status) in stays {
        let id = booking_command
            .create(
                &actor,
                akkor_booking::CreateInput {
                    hotel_id,
                    check_in: today + Duration::days(from),
                    check_out: today + Duration::days(to),
                },
            )
            .await?;

        if status.is_some() {
            booking_command
                .update(
                    &admin,
                    id,
                    akkor_booking::UpdateInput {
                        status,
                        ..Default::default()
                    },
                )
                .await?;
        }

        tracing::info!(booking_id = id, user_id = actor.id, hotel_id, "Seeded booking");
    }

    state.read_db.close().await;
    state.write_db.close().await;

    Ok(())
}
