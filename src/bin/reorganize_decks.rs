use ankiword::{
    anki::api,
    core::http::http_client,
};

const SOURCE_DECK: &str = "4000 Essential English Words::7.UserAdded";
const TARGET_DECK: &str = "4000 Essential English Words::7.Book";

fn deck_query(deck: &str) -> String {
    format!("deck:\"{}\"", deck)
}

/// An empty source deck means the run ends here: no create, move or delete.
fn has_cards_to_move(card_ids: &[u64]) -> bool {
    !card_ids.is_empty()
}

/// The emptied source deck is only deleted when the move reported no error.
fn delete_source_after_move(move_error: Option<&str>) -> bool {
    move_error.is_none()
}

fn main() {
    let client = match http_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    println!("Searching for cards in: {}", SOURCE_DECK);
    let card_ids = match api::find_cards(&client, &deck_query(SOURCE_DECK)) {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("Error connecting to Anki: {}", e);
            return;
        }
    };

    if !has_cards_to_move(&card_ids) {
        println!("No cards found in the source deck. Everything is already organized!");
        return;
    }

    println!("Found {} cards. Moving to {}...", card_ids.len(), TARGET_DECK);

    if let Err(e) = api::create_deck(&client, TARGET_DECK) {
        eprintln!("Could not ensure target deck: {}", e);
        return;
    }

    let move_reply = match api::change_deck(&client, &card_ids, TARGET_DECK) {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("Failed to move cards: {}", e);
            return;
        }
    };

    if delete_source_after_move(move_reply.error.as_deref()) {
        println!("Successfully moved {} cards to {}!", card_ids.len(), TARGET_DECK);
        // The cards already moved, so the deck itself is all that goes.
        match api::delete_decks(&client, &[SOURCE_DECK], false) {
            Ok(reply) if reply.error.is_none() => {
                println!("Deleted empty deck: {}", SOURCE_DECK)
            }
            Ok(reply) => {
                eprintln!("Could not delete source deck: {}", reply.error.unwrap_or_default())
            }
            Err(e) => eprintln!("Could not delete source deck: {}", e),
        }
    } else {
        eprintln!("Failed to move cards: {}", move_reply.error.unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_query_quotes_the_path() {
        assert_eq!(
            deck_query(SOURCE_DECK),
            "deck:\"4000 Essential English Words::7.UserAdded\""
        );
    }

    #[test]
    fn empty_source_deck_means_no_create_move_or_delete() {
        assert!(!has_cards_to_move(&[]));
        assert!(has_cards_to_move(&[1706000000001, 1706000000002]));
    }

    #[test]
    fn source_deck_survives_a_failed_move() {
        assert!(delete_source_after_move(None));
        assert!(!delete_source_after_move(Some("deck was not found")));
    }
}
