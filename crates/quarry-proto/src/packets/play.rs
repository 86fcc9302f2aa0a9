//! Play-state packet IDs.
//!
//! The Play state is an open extension point: every serverbound ID below
//! is routed to a placeholder handler. Payload decoding for these packets
//! is not implemented.

/// Serverbound Play packet IDs.
pub mod serverbound {
    /// Teleport Confirm.
    pub const TELEPORT_CONFIRM: i32 = 0x00;
    /// Query Block NBT.
    pub const QUERY_BLOCK_NBT: i32 = 0x01;
    /// Chat Message.
    pub const CHAT_MESSAGE: i32 = 0x02;
    /// Client Status.
    pub const CLIENT_STATUS: i32 = 0x03;
    /// Client Settings.
    pub const CLIENT_SETTINGS: i32 = 0x04;
    /// Tab-Complete.
    pub const TAB_COMPLETE: i32 = 0x05;
    /// Confirm Transaction.
    pub const CONFIRM_TRANSACTION: i32 = 0x06;
    /// Enchant Item.
    pub const ENCHANT_ITEM: i32 = 0x07;
    /// Click Window.
    pub const CLICK_WINDOW: i32 = 0x08;
    /// Close Window.
    pub const CLOSE_WINDOW: i32 = 0x09;
    /// Plugin Message.
    pub const PLUGIN_MESSAGE: i32 = 0x0A;
    /// Edit Book.
    pub const EDIT_BOOK: i32 = 0x0B;
    /// Query Entity NBT.
    pub const QUERY_ENTITY_NBT: i32 = 0x0C;
    /// Use Entity.
    pub const USE_ENTITY: i32 = 0x0D;
    /// Keep Alive.
    pub const KEEP_ALIVE: i32 = 0x0E;
    /// Player.
    pub const PLAYER: i32 = 0x0F;
    /// Player Position.
    pub const PLAYER_POSITION: i32 = 0x10;
    /// Player Position And Look.
    pub const PLAYER_POSITION_AND_LOOK: i32 = 0x11;
    /// Player Look.
    pub const PLAYER_LOOK: i32 = 0x12;
    /// Vehicle Move.
    pub const VEHICLE_MOVE: i32 = 0x13;
    /// Steer Boat.
    pub const STEER_BOAT: i32 = 0x14;
    /// Pick Item.
    pub const PICK_ITEM: i32 = 0x15;
    /// Craft Recipe Request.
    pub const CRAFT_RECIPE_REQUEST: i32 = 0x16;
    /// Player Abilities.
    pub const PLAYER_ABILITIES: i32 = 0x17;
    /// Player Digging.
    pub const PLAYER_DIGGING: i32 = 0x18;
    /// Entity Action.
    pub const ENTITY_ACTION: i32 = 0x19;
    /// Steer Vehicle.
    pub const STEER_VEHICLE: i32 = 0x1A;
    /// Recipe Book Data.
    pub const RECIPE_BOOK_DATA: i32 = 0x1B;
    /// Name Item.
    pub const NAME_ITEM: i32 = 0x1C;
    /// Resource Pack Status.
    pub const RESOURCE_PACK_STATUS: i32 = 0x1D;
    /// Advancement Tab.
    pub const ADVANCEMENT_TAB: i32 = 0x1E;
    /// Select Trade.
    pub const SELECT_TRADE: i32 = 0x1F;
    /// Set Beacon Effect.
    pub const SET_BEACON_EFFECT: i32 = 0x20;
    /// Held Item Change.
    pub const HELD_ITEM_CHANGE: i32 = 0x21;
    /// Update Command Block.
    pub const UPDATE_COMMAND_BLOCK: i32 = 0x22;
    /// Update Command Block Minecart.
    pub const UPDATE_COMMAND_BLOCK_MINECART: i32 = 0x23;
    /// Creative Inventory Action.
    pub const CREATIVE_INVENTORY_ACTION: i32 = 0x24;
    /// Update Structure Block.
    pub const UPDATE_STRUCTURE_BLOCK: i32 = 0x25;
    /// Update Sign.
    pub const UPDATE_SIGN: i32 = 0x26;
    /// Animation.
    pub const ANIMATION: i32 = 0x27;
    /// Spectate.
    pub const SPECTATE: i32 = 0x28;
    /// Player Block Placement.
    pub const PLAYER_BLOCK_PLACEMENT: i32 = 0x29;
    /// Use Item.
    pub const USE_ITEM: i32 = 0x2A;

    /// The highest serverbound Play packet ID.
    pub const MAX_PACKET_ID: i32 = USE_ITEM;
}
