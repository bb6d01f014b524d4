// Recognized subdivision names and the ISO 3166-1 alpha-3 code of the
// country each belongs to: every ISO 3166-2 subdivision name, as published
// by the Debian iso-codes project (4.15.0). Names that contain a comma are
// left out since they cannot appear in a comma-split row.
//
// Generated; grouped by country, countries in alpha-3 order.
pub const SUBDIVISIONS: &[(&str, &str)] = &[
    // Afghanistan
    ("Badakhshān", "AFG"),
    ("Baghlān", "AFG"),
    ("Balkh", "AFG"),
    ("Bādghīs", "AFG"),
    ("Bāmyān", "AFG"),
    ("Dāykundī", "AFG"),
    ("Farāh", "AFG"),
    ("Fāryāb", "AFG"),
    ("Ghaznī", "AFG"),
    ("Ghōr", "AFG"),
    ("Helmand", "AFG"),
    ("Herāt", "AFG"),
    ("Jowzjān", "AFG"),
    ("Kandahār", "AFG"),
    ("Khōst", "AFG"),
    ("Kunaṟ", "AFG"),
    ("Kunduz", "AFG"),
    ("Kābul", "AFG"),
    ("Kāpīsā", "AFG"),
    ("Laghmān", "AFG"),
    ("Lōgar", "AFG"),
    ("Nangarhār", "AFG"),
    ("Nīmrōz", "AFG"),
    ("Nūristān", "AFG"),
    ("Paktiyā", "AFG"),
    ("Paktīkā", "AFG"),
    ("Panjshayr", "AFG"),
    ("Parwān", "AFG"),
    ("Samangān", "AFG"),
    ("Sar-e Pul", "AFG"),
    ("Takhār", "AFG"),
    ("Uruzgān", "AFG"),
    ("Wardak", "AFG"),
    ("Zābul", "AFG"),
    // Angola
    ("Bengo", "AGO"),
    ("Benguela", "AGO"),
    ("Bié", "AGO"),
    ("Cabinda", "AGO"),
    ("Cuando Cubango", "AGO"),
    ("Cuanza-Norte", "AGO"),
    ("Cuanza-Sul", "AGO"),
    ("Cunene", "AGO"),
    ("Huambo", "AGO"),
    ("Huíla", "AGO"),
    ("Luanda", "AGO"),
    ("Lunda-Norte", "AGO"),
    ("Lunda-Sul", "AGO"),
    ("Malange", "AGO"),
    ("Moxico", "AGO"),
    ("Namibe", "AGO"),
    ("Uíge", "AGO"),
    ("Zaire", "AGO"),
    // Albania
    ("Berat", "ALB"),
    ("Dibër", "ALB"),
    ("Durrës", "ALB"),
    ("Elbasan", "ALB"),
    ("Fier", "ALB"),
    ("Gjirokastër", "ALB"),
    ("Korçë", "ALB"),
    ("Kukës", "ALB"),
    ("Lezhë", "ALB"),
    ("Shkodër", "ALB"),
    ("Tiranë", "ALB"),
    ("Vlorë", "ALB"),
    // Andorra
    ("Andorra la Vella", "AND"),
    ("Canillo", "AND"),
    ("Encamp", "AND"),
    ("Escaldes-Engordany", "AND"),
    ("La Massana", "AND"),
    ("Ordino", "AND"),
    ("Sant Julià de Lòria", "AND"),
    // United Arab Emirates
    ("Abū Z̧aby", "ARE"),
    ("Al Fujayrah", "ARE"),
    ("Ash Shāriqah", "ARE"),
    ("Dubayy", "ARE"),
    ("Ra’s al Khaymah", "ARE"),
    ("Umm al Qaywayn", "ARE"),
    ("‘Ajmān", "ARE"),
    // Argentina
    ("Buenos Aires", "ARG"),
    ("Catamarca", "ARG"),
    ("Chaco", "ARG"),
    ("Chubut", "ARG"),
    ("Ciudad Autónoma de Buenos Aires", "ARG"),
    ("Corrientes", "ARG"),
    ("Córdoba", "ARG"),
    ("Entre Ríos", "ARG"),
    ("Formosa", "ARG"),
    ("Jujuy", "ARG"),
    ("La Pampa", "ARG"),
    ("La Rioja", "ARG"),
    ("Mendoza", "ARG"),
    ("Misiones", "ARG"),
    ("Neuquén", "ARG"),
    ("Río Negro", "ARG"),
    ("Salta", "ARG"),
    ("San Juan", "ARG"),
    ("San Luis", "ARG"),
    ("Santa Cruz", "ARG"),
    ("Santa Fe", "ARG"),
    ("Santiago del Estero", "ARG"),
    ("Tierra del Fuego", "ARG"),
    ("Tucumán", "ARG"),
    // Armenia
    ("Aragac̣otn", "ARM"),
    ("Ararat", "ARM"),
    ("Armavir", "ARM"),
    ("Erevan", "ARM"),
    ("Geġark'unik'", "ARM"),
    ("Kotayk'", "ARM"),
    ("Loṙi", "ARM"),
    ("Syunik'", "ARM"),
    ("Tavuš", "ARM"),
    ("Vayoć Jor", "ARM"),
    ("Širak", "ARM"),
    // Antigua and Barbuda
    ("Barbuda", "ATG"),
    ("Redonda", "ATG"),
    ("Saint George", "ATG"),
    ("Saint John", "ATG"),
    ("Saint Mary", "ATG"),
    ("Saint Paul", "ATG"),
    ("Saint Peter", "ATG"),
    ("Saint Philip", "ATG"),
    // Australia
    ("Australian Capital Territory", "AUS"),
    ("New South Wales", "AUS"),
    ("Northern Territory", "AUS"),
    ("Queensland", "AUS"),
    ("South Australia", "AUS"),
    ("Tasmania", "AUS"),
    ("Victoria", "AUS"),
    ("Western Australia", "AUS"),
    // Austria
    ("Burgenland", "AUT"),
    ("Kärnten", "AUT"),
    ("Niederösterreich", "AUT"),
    ("Oberösterreich", "AUT"),
    ("Salzburg", "AUT"),
    ("Steiermark", "AUT"),
    ("Tirol", "AUT"),
    ("Vorarlberg", "AUT"),
    ("Wien", "AUT"),
    // Azerbaijan
    ("Abşeron", "AZE"),
    ("Astara", "AZE"),
    ("Ağcabədi", "AZE"),
    ("Ağdam", "AZE"),
    ("Ağdaş", "AZE"),
    ("Ağstafa", "AZE"),
    ("Ağsu", "AZE"),
    ("Babək", "AZE"),
    ("Bakı", "AZE"),
    ("Balakən", "AZE"),
    ("Beyləqan", "AZE"),
    ("Biləsuvar", "AZE"),
    ("Bərdə", "AZE"),
    ("Culfa", "AZE"),
    ("Cəbrayıl", "AZE"),
    ("Cəlilabad", "AZE"),
    ("Daşkəsən", "AZE"),
    ("Füzuli", "AZE"),
    ("Goranboy", "AZE"),
    ("Göygöl", "AZE"),
    ("Göyçay", "AZE"),
    ("Gədəbəy", "AZE"),
    ("Gəncə", "AZE"),
    ("Hacıqabul", "AZE"),
    ("Kürdəmir", "AZE"),
    ("Kǝngǝrli", "AZE"),
    ("Kəlbəcər", "AZE"),
    ("Laçın", "AZE"),
    ("Lerik", "AZE"),
    ("Lənkəran", "AZE"),
    ("Masallı", "AZE"),
    ("Mingəçevir", "AZE"),
    ("Naftalan", "AZE"),
    ("Naxçıvan", "AZE"),
    ("Neftçala", "AZE"),
    ("Ordubad", "AZE"),
    ("Oğuz", "AZE"),
    ("Qax", "AZE"),
    ("Qazax", "AZE"),
    ("Qobustan", "AZE"),
    ("Quba", "AZE"),
    ("Qubadlı", "AZE"),
    ("Qusar", "AZE"),
    ("Qəbələ", "AZE"),
    ("Saatlı", "AZE"),
    ("Sabirabad", "AZE"),
    ("Salyan", "AZE"),
    ("Samux", "AZE"),
    ("Siyəzən", "AZE"),
    ("Sumqayıt", "AZE"),
    ("Sədərək", "AZE"),
    ("Tovuz", "AZE"),
    ("Tərtər", "AZE"),
    ("Ucar", "AZE"),
    ("Xankəndi", "AZE"),
    ("Xaçmaz", "AZE"),
    ("Xocalı", "AZE"),
    ("Xocavənd", "AZE"),
    ("Xızı", "AZE"),
    ("Yardımlı", "AZE"),
    ("Yevlax", "AZE"),
    ("Zaqatala", "AZE"),
    ("Zəngilan", "AZE"),
    ("Zərdab", "AZE"),
    ("İmişli", "AZE"),
    ("İsmayıllı", "AZE"),
    ("Şabran", "AZE"),
    ("Şahbuz", "AZE"),
    ("Şamaxı", "AZE"),
    ("Şirvan", "AZE"),
    ("Şuşa", "AZE"),
    ("Şəki", "AZE"),
    ("Şəmkir", "AZE"),
    ("Şərur", "AZE"),
    // Burundi
    ("Bubanza", "BDI"),
    ("Bujumbura Mairie", "BDI"),
    ("Bujumbura Rural", "BDI"),
    ("Bururi", "BDI"),
    ("Cankuzo", "BDI"),
    ("Cibitoke", "BDI"),
    ("Gitega", "BDI"),
    ("Karuzi", "BDI"),
    ("Kayanza", "BDI"),
    ("Kirundo", "BDI"),
    ("Makamba", "BDI"),
    ("Muramvya", "BDI"),
    ("Muyinga", "BDI"),
    ("Mwaro", "BDI"),
    ("Ngozi", "BDI"),
    ("Rumonge", "BDI"),
    ("Rutana", "BDI"),
    ("Ruyigi", "BDI"),
    // Belgium
    ("Antwerpen", "BEL"),
    ("Brabant wallon", "BEL"),
    ("Brussels Hoofdstedelijk Gewest", "BEL"),
    ("Hainaut", "BEL"),
    ("Limburg", "BEL"),
    ("Liège", "BEL"),
    ("Luxembourg", "BEL"),
    ("Namur", "BEL"),
    ("Oost-Vlaanderen", "BEL"),
    ("Vlaams Gewest", "BEL"),
    ("Vlaams-Brabant", "BEL"),
    ("West-Vlaanderen", "BEL"),
    // Benin
    ("Alibori", "BEN"),
    ("Atacora", "BEN"),
    ("Atlantique", "BEN"),
    ("Borgou", "BEN"),
    ("Collines", "BEN"),
    ("Couffo", "BEN"),
    ("Donga", "BEN"),
    ("Littoral", "BEN"),
    ("Mono", "BEN"),
    ("Ouémé", "BEN"),
    ("Plateau", "BEN"),
    ("Zou", "BEN"),
    // Bonaire, Sint Eustatius and Saba
    ("Bonaire", "BES"),
    ("Saba", "BES"),
    ("Sint Eustatius", "BES"),
    // Burkina Faso
    ("Balé", "BFA"),
    ("Bam", "BFA"),
    ("Banwa", "BFA"),
    ("Bazèga", "BFA"),
    ("Boucle du Mouhoun", "BFA"),
    ("Bougouriba", "BFA"),
    ("Boulgou", "BFA"),
    ("Boulkiemdé", "BFA"),
    ("Cascades", "BFA"),
    ("Centre", "BFA"),
    ("Centre-Est", "BFA"),
    ("Centre-Nord", "BFA"),
    ("Centre-Ouest", "BFA"),
    ("Centre-Sud", "BFA"),
    ("Comoé", "BFA"),
    ("Est", "BFA"),
    ("Ganzourgou", "BFA"),
    ("Gnagna", "BFA"),
    ("Gourma", "BFA"),
    ("Hauts-Bassins", "BFA"),
    ("Houet", "BFA"),
    ("Ioba", "BFA"),
    ("Kadiogo", "BFA"),
    ("Komondjari", "BFA"),
    ("Kompienga", "BFA"),
    ("Kossi", "BFA"),
    ("Koulpélogo", "BFA"),
    ("Kouritenga", "BFA"),
    ("Kourwéogo", "BFA"),
    ("Kénédougou", "BFA"),
    ("Loroum", "BFA"),
    ("Léraba", "BFA"),
    ("Mouhoun", "BFA"),
    ("Nahouri", "BFA"),
    ("Namentenga", "BFA"),
    ("Nayala", "BFA"),
    ("Nord", "BFA"),
    ("Noumbiel", "BFA"),
    ("Oubritenga", "BFA"),
    ("Oudalan", "BFA"),
    ("Passoré", "BFA"),
    ("Plateau-Central", "BFA"),
    ("Poni", "BFA"),
    ("Sahel", "BFA"),
    ("Sanguié", "BFA"),
    ("Sanmatenga", "BFA"),
    ("Sissili", "BFA"),
    ("Soum", "BFA"),
    ("Sourou", "BFA"),
    ("Sud-Ouest", "BFA"),
    ("Séno", "BFA"),
    ("Tapoa", "BFA"),
    ("Tuy", "BFA"),
    ("Yagha", "BFA"),
    ("Yatenga", "BFA"),
    ("Ziro", "BFA"),
    ("Zondoma", "BFA"),
    ("Zoundwéogo", "BFA"),
    // Bangladesh
    ("Bagerhat", "BGD"),
    ("Bandarban", "BGD"),
    ("Barguna", "BGD"),
    ("Barishal", "BGD"),
    ("Bhola", "BGD"),
    ("Bogura", "BGD"),
    ("Brahmanbaria", "BGD"),
    ("Chandpur", "BGD"),
    ("Chapai Nawabganj", "BGD"),
    ("Chattogram", "BGD"),
    ("Chuadanga", "BGD"),
    ("Cox's Bazar", "BGD"),
    ("Cumilla", "BGD"),
    ("Dhaka", "BGD"),
    ("Dinajpur", "BGD"),
    ("Faridpur", "BGD"),
    ("Feni", "BGD"),
    ("Gaibandha", "BGD"),
    ("Gazipur", "BGD"),
    ("Gopalganj", "BGD"),
    ("Habiganj", "BGD"),
    ("Jamalpur", "BGD"),
    ("Jashore", "BGD"),
    ("Jhalakathi", "BGD"),
    ("Jhenaidah", "BGD"),
    ("Joypurhat", "BGD"),
    ("Khagrachhari", "BGD"),
    ("Khulna", "BGD"),
    ("Kishoreganj", "BGD"),
    ("Kurigram", "BGD"),
    ("Kushtia", "BGD"),
    ("Lakshmipur", "BGD"),
    ("Lalmonirhat", "BGD"),
    ("Madaripur", "BGD"),
    ("Magura", "BGD"),
    ("Manikganj", "BGD"),
    ("Meherpur", "BGD"),
    ("Moulvibazar", "BGD"),
    ("Munshiganj", "BGD"),
    ("Mymensingh", "BGD"),
    ("Naogaon", "BGD"),
    ("Narail", "BGD"),
    ("Narayanganj", "BGD"),
    ("Narsingdi", "BGD"),
    ("Natore", "BGD"),
    ("Netrakona", "BGD"),
    ("Nilphamari", "BGD"),
    ("Noakhali", "BGD"),
    ("Pabna", "BGD"),
    ("Panchagarh", "BGD"),
    ("Patuakhali", "BGD"),
    ("Pirojpur", "BGD"),
    ("Rajbari", "BGD"),
    ("Rajshahi", "BGD"),
    ("Rangamati", "BGD"),
    ("Rangpur", "BGD"),
    ("Satkhira", "BGD"),
    ("Shariatpur", "BGD"),
    ("Sherpur", "BGD"),
    ("Sirajganj", "BGD"),
    ("Sunamganj", "BGD"),
    ("Sylhet", "BGD"),
    ("Tangail", "BGD"),
    ("Thakurgaon", "BGD"),
    // Bulgaria
    ("Blagoevgrad", "BGR"),
    ("Burgas", "BGR"),
    ("Dobrich", "BGR"),
    ("Gabrovo", "BGR"),
    ("Haskovo", "BGR"),
    ("Kardzhali", "BGR"),
    ("Kyustendil", "BGR"),
    ("Lovech", "BGR"),
    ("Montana", "BGR"),
    ("Pazardzhik", "BGR"),
    ("Pernik", "BGR"),
    ("Pleven", "BGR"),
    ("Plovdiv", "BGR"),
    ("Razgrad", "BGR"),
    ("Ruse", "BGR"),
    ("Shumen", "BGR"),
    ("Silistra", "BGR"),
    ("Sliven", "BGR"),
    ("Smolyan", "BGR"),
    ("Sofia", "BGR"),
    ("Sofia (stolitsa)", "BGR"),
    ("Stara Zagora", "BGR"),
    ("Targovishte", "BGR"),
    ("Varna", "BGR"),
    ("Veliko Tarnovo", "BGR"),
    ("Vidin", "BGR"),
    ("Vratsa", "BGR"),
    ("Yambol", "BGR"),
    // Bahrain
    ("Al Janūbīyah", "BHR"),
    ("Al Muḩarraq", "BHR"),
    ("Al ‘Āşimah", "BHR"),
    ("Ash Shamālīyah", "BHR"),
    // Bahamas
    ("Acklins", "BHS"),
    ("Berry Islands", "BHS"),
    ("Bimini", "BHS"),
    ("Black Point", "BHS"),
    ("Cat Island", "BHS"),
    ("Central Abaco", "BHS"),
    ("Central Andros", "BHS"),
    ("Central Eleuthera", "BHS"),
    ("City of Freeport", "BHS"),
    ("Crooked Island and Long Cay", "BHS"),
    ("East Grand Bahama", "BHS"),
    ("Exuma", "BHS"),
    ("Grand Cay", "BHS"),
    ("Harbour Island", "BHS"),
    ("Hope Town", "BHS"),
    ("Inagua", "BHS"),
    ("Long Island", "BHS"),
    ("Mangrove Cay", "BHS"),
    ("Mayaguana", "BHS"),
    ("Moore's Island", "BHS"),
    ("New Providence", "BHS"),
    ("North Abaco", "BHS"),
    ("North Andros", "BHS"),
    ("North Eleuthera", "BHS"),
    ("Ragged Island", "BHS"),
    ("Rum Cay", "BHS"),
    ("San Salvador", "BHS"),
    ("South Abaco", "BHS"),
    ("South Andros", "BHS"),
    ("South Eleuthera", "BHS"),
    ("Spanish Wells", "BHS"),
    ("West Grand Bahama", "BHS"),
    // Bosnia and Herzegovina
    ("Brčko distrikt", "BIH"),
    ("Federacija Bosne i Hercegovine", "BIH"),
    ("Republika Srpska", "BIH"),
    // Belarus
    ("Bresckaja voblasć", "BLR"),
    ("Gomel'skaja oblast'", "BLR"),
    ("Gorod Minsk", "BLR"),
    ("Grodnenskaja oblast'", "BLR"),
    ("Mahilioŭskaja voblasć", "BLR"),
    ("Minskaja oblast'", "BLR"),
    ("Viciebskaja voblasć", "BLR"),
    // Belize
    ("Belize", "BLZ"),
    ("Cayo", "BLZ"),
    ("Corozal", "BLZ"),
    ("Orange Walk", "BLZ"),
    ("Stann Creek", "BLZ"),
    ("Toledo", "BLZ"),
    // Bolivia, Plurinational State of
    ("Chuquisaca", "BOL"),
    ("Cochabamba", "BOL"),
    ("El Beni", "BOL"),
    ("La Paz", "BOL"),
    ("Oruro", "BOL"),
    ("Pando", "BOL"),
    ("Potosí", "BOL"),
    ("Santa Cruz", "BOL"),
    ("Tarija", "BOL"),
    // Brazil
    ("Acre", "BRA"),
    ("Alagoas", "BRA"),
    ("Amapá", "BRA"),
    ("Amazonas", "BRA"),
    ("Bahia", "BRA"),
    ("Ceará", "BRA"),
    ("Distrito Federal", "BRA"),
    ("Espírito Santo", "BRA"),
    ("Goiás", "BRA"),
    ("Maranhão", "BRA"),
    ("Mato Grosso", "BRA"),
    ("Mato Grosso do Sul", "BRA"),
    ("Minas Gerais", "BRA"),
    ("Paraná", "BRA"),
    ("Paraíba", "BRA"),
    ("Pará", "BRA"),
    ("Pernambuco", "BRA"),
    ("Piauí", "BRA"),
    ("Rio Grande do Norte", "BRA"),
    ("Rio Grande do Sul", "BRA"),
    ("Rio de Janeiro", "BRA"),
    ("Rondônia", "BRA"),
    ("Roraima", "BRA"),
    ("Santa Catarina", "BRA"),
    ("Sergipe", "BRA"),
    ("São Paulo", "BRA"),
    ("Tocantins", "BRA"),
    // Barbados
    ("Christ Church", "BRB"),
    ("Saint Andrew", "BRB"),
    ("Saint George", "BRB"),
    ("Saint James", "BRB"),
    ("Saint John", "BRB"),
    ("Saint Joseph", "BRB"),
    ("Saint Lucy", "BRB"),
    ("Saint Michael", "BRB"),
    ("Saint Peter", "BRB"),
    ("Saint Philip", "BRB"),
    ("Saint Thomas", "BRB"),
    // Brunei Darussalam
    ("Belait", "BRN"),
    ("Brunei-Muara", "BRN"),
    ("Temburong", "BRN"),
    ("Tutong", "BRN"),
    // Bhutan
    ("Bumthang", "BTN"),
    ("Chhukha", "BTN"),
    ("Dagana", "BTN"),
    ("Gasa", "BTN"),
    ("Haa", "BTN"),
    ("Lhuentse", "BTN"),
    ("Monggar", "BTN"),
    ("Paro", "BTN"),
    ("Pema Gatshel", "BTN"),
    ("Punakha", "BTN"),
    ("Samdrup Jongkhar", "BTN"),
    ("Samtse", "BTN"),
    ("Sarpang", "BTN"),
    ("Thimphu", "BTN"),
    ("Trashi Yangtse", "BTN"),
    ("Trashigang", "BTN"),
    ("Trongsa", "BTN"),
    ("Tsirang", "BTN"),
    ("Wangdue Phodrang", "BTN"),
    ("Zhemgang", "BTN"),
    // Botswana
    ("Central", "BWA"),
    ("Chobe", "BWA"),
    ("Francistown", "BWA"),
    ("Gaborone", "BWA"),
    ("Ghanzi", "BWA"),
    ("Jwaneng", "BWA"),
    ("Kgalagadi", "BWA"),
    ("Kgatleng", "BWA"),
    ("Kweneng", "BWA"),
    ("Lobatse", "BWA"),
    ("North East", "BWA"),
    ("North West", "BWA"),
    ("Selibe Phikwe", "BWA"),
    ("South East", "BWA"),
    ("Southern", "BWA"),
    ("Sowa Town", "BWA"),
    // Central African Republic
    ("Bamingui-Bangoran", "CAF"),
    ("Bangui", "CAF"),
    ("Basse-Kotto", "CAF"),
    ("Gribingui", "CAF"),
    ("Haut-Mbomou", "CAF"),
    ("Haute-Kotto", "CAF"),
    ("Haute-Sangha / Mambéré-Kadéï", "CAF"),
    ("Kemö-Gïrïbïngï", "CAF"),
    ("Lobaye", "CAF"),
    ("Mbomou", "CAF"),
    ("Nana-Mambéré", "CAF"),
    ("Ombella-Mpoko", "CAF"),
    ("Ouaka", "CAF"),
    ("Ouham", "CAF"),
    ("Ouham-Pendé", "CAF"),
    ("Sangha", "CAF"),
    ("Vakaga", "CAF"),
    // Canada
    ("Alberta", "CAN"),
    ("British Columbia", "CAN"),
    ("Manitoba", "CAN"),
    ("New Brunswick", "CAN"),
    ("Newfoundland and Labrador", "CAN"),
    ("Northwest Territories", "CAN"),
    ("Nova Scotia", "CAN"),
    ("Nunavut", "CAN"),
    ("Ontario", "CAN"),
    ("Prince Edward Island", "CAN"),
    ("Quebec", "CAN"),
    ("Saskatchewan", "CAN"),
    ("Yukon", "CAN"),
    // Switzerland
    ("Aargau", "CHE"),
    ("Appenzell Ausserrhoden", "CHE"),
    ("Appenzell Innerrhoden", "CHE"),
    ("Basel-Landschaft", "CHE"),
    ("Basel-Stadt", "CHE"),
    ("Bern", "CHE"),
    ("Freiburg", "CHE"),
    ("Genève", "CHE"),
    ("Glarus", "CHE"),
    ("Graubünden", "CHE"),
    ("Jura", "CHE"),
    ("Luzern", "CHE"),
    ("Neuchâtel", "CHE"),
    ("Nidwalden", "CHE"),
    ("Obwalden", "CHE"),
    ("Sankt Gallen", "CHE"),
    ("Schaffhausen", "CHE"),
    ("Schwyz", "CHE"),
    ("Solothurn", "CHE"),
    ("Thurgau", "CHE"),
    ("Ticino", "CHE"),
    ("Uri", "CHE"),
    ("Valais", "CHE"),
    ("Vaud", "CHE"),
    ("Zug", "CHE"),
    ("Zürich", "CHE"),
    // Chile
    ("Aisén del General Carlos Ibañez del Campo", "CHL"),
    ("Antofagasta", "CHL"),
    ("Arica y Parinacota", "CHL"),
    ("Atacama", "CHL"),
    ("Biobío", "CHL"),
    ("Coquimbo", "CHL"),
    ("La Araucanía", "CHL"),
    ("Libertador General Bernardo O'Higgins", "CHL"),
    ("Los Lagos", "CHL"),
    ("Los Ríos", "CHL"),
    ("Magallanes", "CHL"),
    ("Maule", "CHL"),
    ("Región Metropolitana de Santiago", "CHL"),
    ("Tarapacá", "CHL"),
    ("Valparaíso", "CHL"),
    ("Ñuble", "CHL"),
    // China
    ("Anhui Sheng", "CHN"),
    ("Beijing Shi", "CHN"),
    ("Chongqing Shi", "CHN"),
    ("Fujian Sheng", "CHN"),
    ("Gansu Sheng", "CHN"),
    ("Guangdong Sheng", "CHN"),
    ("Guangxi Zhuangzu Zizhiqu", "CHN"),
    ("Guizhou Sheng", "CHN"),
    ("Hainan Sheng", "CHN"),
    ("Hebei Sheng", "CHN"),
    ("Heilongjiang Sheng", "CHN"),
    ("Henan Sheng", "CHN"),
    ("Hong Kong SAR", "CHN"),
    ("Hubei Sheng", "CHN"),
    ("Hunan Sheng", "CHN"),
    ("Jiangsu Sheng", "CHN"),
    ("Jiangxi Sheng", "CHN"),
    ("Jilin Sheng", "CHN"),
    ("Liaoning Sheng", "CHN"),
    ("Macao SAR", "CHN"),
    ("Nei Mongol Zizhiqu", "CHN"),
    ("Ningxia Huizi Zizhiqu", "CHN"),
    ("Qinghai Sheng", "CHN"),
    ("Shaanxi Sheng", "CHN"),
    ("Shandong Sheng", "CHN"),
    ("Shanghai Shi", "CHN"),
    ("Shanxi Sheng", "CHN"),
    ("Sichuan Sheng", "CHN"),
    ("Taiwan Sheng", "CHN"),
    ("Tianjin Shi", "CHN"),
    ("Xinjiang Uygur Zizhiqu", "CHN"),
    ("Xizang Zizhiqu", "CHN"),
    ("Yunnan Sheng", "CHN"),
    ("Zhejiang Sheng", "CHN"),
    // Côte d'Ivoire
    ("Abidjan", "CIV"),
    ("Bas-Sassandra", "CIV"),
    ("Comoé", "CIV"),
    ("Denguélé", "CIV"),
    ("Gôh-Djiboua", "CIV"),
    ("Lacs", "CIV"),
    ("Lagunes", "CIV"),
    ("Montagnes", "CIV"),
    ("Sassandra-Marahoué", "CIV"),
    ("Savanes", "CIV"),
    ("Vallée du Bandama", "CIV"),
    ("Woroba", "CIV"),
    ("Yamoussoukro", "CIV"),
    ("Zanzan", "CIV"),
    // Cameroon
    ("Adamaoua", "CMR"),
    ("Centre", "CMR"),
    ("East", "CMR"),
    ("Far North", "CMR"),
    ("Littoral", "CMR"),
    ("North", "CMR"),
    ("North-West", "CMR"),
    ("South", "CMR"),
    ("South-West", "CMR"),
    ("West", "CMR"),
    // Congo, The Democratic Republic of the
    ("Bas-Uélé", "COD"),
    ("Haut-Katanga", "COD"),
    ("Haut-Lomami", "COD"),
    ("Haut-Uélé", "COD"),
    ("Ituri", "COD"),
    ("Kasaï", "COD"),
    ("Kasaï Central", "COD"),
    ("Kasaï Oriental", "COD"),
    ("Kinshasa", "COD"),
    ("Kongo Central", "COD"),
    ("Kwango", "COD"),
    ("Kwilu", "COD"),
    ("Lomami", "COD"),
    ("Lualaba", "COD"),
    ("Mai-Ndombe", "COD"),
    ("Maniema", "COD"),
    ("Mongala", "COD"),
    ("Nord-Kivu", "COD"),
    ("Nord-Ubangi", "COD"),
    ("Sankuru", "COD"),
    ("Sud-Kivu", "COD"),
    ("Sud-Ubangi", "COD"),
    ("Tanganyika", "COD"),
    ("Tshopo", "COD"),
    ("Tshuapa", "COD"),
    ("Équateur", "COD"),
    // Congo
    ("Bouenza", "COG"),
    ("Brazzaville", "COG"),
    ("Cuvette", "COG"),
    ("Cuvette-Ouest", "COG"),
    ("Kouilou", "COG"),
    ("Likouala", "COG"),
    ("Lékoumou", "COG"),
    ("Niari", "COG"),
    ("Plateaux", "COG"),
    ("Pointe-Noire", "COG"),
    ("Pool", "COG"),
    ("Sangha", "COG"),
    // Colombia
    ("Amazonas", "COL"),
    ("Antioquia", "COL"),
    ("Arauca", "COL"),
    ("Atlántico", "COL"),
    ("Bolívar", "COL"),
    ("Boyacá", "COL"),
    ("Caldas", "COL"),
    ("Caquetá", "COL"),
    ("Casanare", "COL"),
    ("Cauca", "COL"),
    ("Cesar", "COL"),
    ("Chocó", "COL"),
    ("Cundinamarca", "COL"),
    ("Córdoba", "COL"),
    ("Distrito Capital de Bogotá", "COL"),
    ("Guainía", "COL"),
    ("Guaviare", "COL"),
    ("Huila", "COL"),
    ("La Guajira", "COL"),
    ("Magdalena", "COL"),
    ("Meta", "COL"),
    ("Nariño", "COL"),
    ("Norte de Santander", "COL"),
    ("Putumayo", "COL"),
    ("Quindío", "COL"),
    ("Risaralda", "COL"),
    ("Santander", "COL"),
    ("Sucre", "COL"),
    ("Tolima", "COL"),
    ("Valle del Cauca", "COL"),
    ("Vaupés", "COL"),
    ("Vichada", "COL"),
    // Comoros
    ("Andjazîdja", "COM"),
    ("Andjouân", "COM"),
    ("Mohéli", "COM"),
    // Cabo Verde
    ("Boa Vista", "CPV"),
    ("Brava", "CPV"),
    ("Ilhas de Barlavento", "CPV"),
    ("Ilhas de Sotavento", "CPV"),
    ("Maio", "CPV"),
    ("Mosteiros", "CPV"),
    ("Paul", "CPV"),
    ("Porto Novo", "CPV"),
    ("Praia", "CPV"),
    ("Ribeira Brava", "CPV"),
    ("Ribeira Grande", "CPV"),
    ("Ribeira Grande de Santiago", "CPV"),
    ("Sal", "CPV"),
    ("Santa Catarina", "CPV"),
    ("Santa Catarina do Fogo", "CPV"),
    ("Santa Cruz", "CPV"),
    ("São Domingos", "CPV"),
    ("São Filipe", "CPV"),
    ("São Lourenço dos Órgãos", "CPV"),
    ("São Miguel", "CPV"),
    ("São Salvador do Mundo", "CPV"),
    ("São Vicente", "CPV"),
    ("Tarrafal", "CPV"),
    ("Tarrafal de São Nicolau", "CPV"),
    // Costa Rica
    ("Alajuela", "CRI"),
    ("Cartago", "CRI"),
    ("Guanacaste", "CRI"),
    ("Heredia", "CRI"),
    ("Limón", "CRI"),
    ("Puntarenas", "CRI"),
    ("San José", "CRI"),
    // Cuba
    ("Artemisa", "CUB"),
    ("Camagüey", "CUB"),
    ("Ciego de Ávila", "CUB"),
    ("Cienfuegos", "CUB"),
    ("Granma", "CUB"),
    ("Guantánamo", "CUB"),
    ("Holguín", "CUB"),
    ("Isla de la Juventud", "CUB"),
    ("La Habana", "CUB"),
    ("Las Tunas", "CUB"),
    ("Matanzas", "CUB"),
    ("Mayabeque", "CUB"),
    ("Pinar del Río", "CUB"),
    ("Sancti Spíritus", "CUB"),
    ("Santiago de Cuba", "CUB"),
    ("Villa Clara", "CUB"),
    // Cyprus
    ("Ammochostos", "CYP"),
    ("Baf", "CYP"),
    ("Girne", "CYP"),
    ("Larnaka", "CYP"),
    ("Lefkosia", "CYP"),
    ("Lemesos", "CYP"),
    // Czechia
    ("Benešov", "CZE"),
    ("Beroun", "CZE"),
    ("Blansko", "CZE"),
    ("Brno-město", "CZE"),
    ("Brno-venkov", "CZE"),
    ("Bruntál", "CZE"),
    ("Břeclav", "CZE"),
    ("Cheb", "CZE"),
    ("Chomutov", "CZE"),
    ("Chrudim", "CZE"),
    ("Domažlice", "CZE"),
    ("Děčín", "CZE"),
    ("Frýdek-Místek", "CZE"),
    ("Havlíčkův Brod", "CZE"),
    ("Hodonín", "CZE"),
    ("Hradec Králové", "CZE"),
    ("Jablonec nad Nisou", "CZE"),
    ("Jeseník", "CZE"),
    ("Jihlava", "CZE"),
    ("Jihomoravský kraj", "CZE"),
    ("Jihočeský kraj", "CZE"),
    ("Jindřichův Hradec", "CZE"),
    ("Jičín", "CZE"),
    ("Karlovarský kraj", "CZE"),
    ("Karlovy Vary", "CZE"),
    ("Karviná", "CZE"),
    ("Kladno", "CZE"),
    ("Klatovy", "CZE"),
    ("Kolín", "CZE"),
    ("Kraj Vysočina", "CZE"),
    ("Kroměříž", "CZE"),
    ("Královéhradecký kraj", "CZE"),
    ("Kutná Hora", "CZE"),
    ("Liberec", "CZE"),
    ("Liberecký kraj", "CZE"),
    ("Litoměřice", "CZE"),
    ("Louny", "CZE"),
    ("Mladá Boleslav", "CZE"),
    ("Moravskoslezský kraj", "CZE"),
    ("Most", "CZE"),
    ("Mělník", "CZE"),
    ("Nový Jičín", "CZE"),
    ("Nymburk", "CZE"),
    ("Náchod", "CZE"),
    ("Olomouc", "CZE"),
    ("Olomoucký kraj", "CZE"),
    ("Opava", "CZE"),
    ("Ostrava-město", "CZE"),
    ("Pardubice", "CZE"),
    ("Pardubický kraj", "CZE"),
    ("Pelhřimov", "CZE"),
    ("Plzeň-jih", "CZE"),
    ("Plzeň-město", "CZE"),
    ("Plzeň-sever", "CZE"),
    ("Plzeňský kraj", "CZE"),
    ("Prachatice", "CZE"),
    ("Praha-východ", "CZE"),
    ("Praha-západ", "CZE"),
    ("Prostějov", "CZE"),
    ("Písek", "CZE"),
    ("Přerov", "CZE"),
    ("Příbram", "CZE"),
    ("Rakovník", "CZE"),
    ("Rokycany", "CZE"),
    ("Rychnov nad Kněžnou", "CZE"),
    ("Semily", "CZE"),
    ("Sokolov", "CZE"),
    ("Strakonice", "CZE"),
    ("Středočeský kraj", "CZE"),
    ("Svitavy", "CZE"),
    ("Tachov", "CZE"),
    ("Teplice", "CZE"),
    ("Trutnov", "CZE"),
    ("Tábor", "CZE"),
    ("Třebíč", "CZE"),
    ("Uherské Hradiště", "CZE"),
    ("Vsetín", "CZE"),
    ("Vyškov", "CZE"),
    ("Zlín", "CZE"),
    ("Zlínský kraj", "CZE"),
    ("Znojmo", "CZE"),
    ("Ústecký kraj", "CZE"),
    ("Ústí nad Labem", "CZE"),
    ("Ústí nad Orlicí", "CZE"),
    ("Česká Lípa", "CZE"),
    ("České Budějovice", "CZE"),
    ("Český Krumlov", "CZE"),
    ("Šumperk", "CZE"),
    ("Žďár nad Sázavou", "CZE"),
    // Germany
    ("Baden-Württemberg", "DEU"),
    ("Bayern", "DEU"),
    ("Berlin", "DEU"),
    ("Brandenburg", "DEU"),
    ("Bremen", "DEU"),
    ("Hamburg", "DEU"),
    ("Hessen", "DEU"),
    ("Mecklenburg-Vorpommern", "DEU"),
    ("Niedersachsen", "DEU"),
    ("Nordrhein-Westfalen", "DEU"),
    ("Rheinland-Pfalz", "DEU"),
    ("Saarland", "DEU"),
    ("Sachsen", "DEU"),
    ("Sachsen-Anhalt", "DEU"),
    ("Schleswig-Holstein", "DEU"),
    ("Thüringen", "DEU"),
    // Djibouti
    ("Ali Sabieh", "DJI"),
    ("Arta", "DJI"),
    ("Awbūk", "DJI"),
    ("Dikhil", "DJI"),
    ("Djibouti", "DJI"),
    ("Tadjourah", "DJI"),
    // Dominica
    ("Saint Andrew", "DMA"),
    ("Saint David", "DMA"),
    ("Saint George", "DMA"),
    ("Saint John", "DMA"),
    ("Saint Joseph", "DMA"),
    ("Saint Luke", "DMA"),
    ("Saint Mark", "DMA"),
    ("Saint Patrick", "DMA"),
    ("Saint Paul", "DMA"),
    ("Saint Peter", "DMA"),
    // Denmark
    ("Hovedstaden", "DNK"),
    ("Midtjylland", "DNK"),
    ("Nordjylland", "DNK"),
    ("Sjælland", "DNK"),
    ("Syddanmark", "DNK"),
    // Dominican Republic
    ("Azua", "DOM"),
    ("Baoruco", "DOM"),
    ("Barahona", "DOM"),
    ("Cibao Nordeste", "DOM"),
    ("Cibao Noroeste", "DOM"),
    ("Cibao Norte", "DOM"),
    ("Cibao Sur", "DOM"),
    ("Dajabón", "DOM"),
    ("Distrito Nacional (Santo Domingo)", "DOM"),
    ("Duarte", "DOM"),
    ("El Seibo", "DOM"),
    ("El Valle", "DOM"),
    ("Elías Piña", "DOM"),
    ("Enriquillo", "DOM"),
    ("Espaillat", "DOM"),
    ("Hato Mayor", "DOM"),
    ("Hermanas Mirabal", "DOM"),
    ("Higuamo", "DOM"),
    ("Independencia", "DOM"),
    ("La Altagracia", "DOM"),
    ("La Romana", "DOM"),
    ("La Vega", "DOM"),
    ("María Trinidad Sánchez", "DOM"),
    ("Monseñor Nouel", "DOM"),
    ("Monte Cristi", "DOM"),
    ("Monte Plata", "DOM"),
    ("Ozama", "DOM"),
    ("Pedernales", "DOM"),
    ("Peravia", "DOM"),
    ("Puerto Plata", "DOM"),
    ("Samaná", "DOM"),
    ("San Cristóbal", "DOM"),
    ("San José de Ocoa", "DOM"),
    ("San Juan", "DOM"),
    ("San Pedro de Macorís", "DOM"),
    ("Santiago", "DOM"),
    ("Santiago Rodríguez", "DOM"),
    ("Santo Domingo", "DOM"),
    ("Sánchez Ramírez", "DOM"),
    ("Valdesia", "DOM"),
    ("Valverde", "DOM"),
    ("Yuma", "DOM"),
    // Algeria
    ("Adrar", "DZA"),
    ("Alger", "DZA"),
    ("Annaba", "DZA"),
    ("Aïn Defla", "DZA"),
    ("Aïn Témouchent", "DZA"),
    ("Batna", "DZA"),
    ("Biskra", "DZA"),
    ("Blida", "DZA"),
    ("Bordj Bou Arréridj", "DZA"),
    ("Bouira", "DZA"),
    ("Boumerdès", "DZA"),
    ("Béchar", "DZA"),
    ("Béjaïa", "DZA"),
    ("Chlef", "DZA"),
    ("Constantine", "DZA"),
    ("Djelfa", "DZA"),
    ("El Bayadh", "DZA"),
    ("El Oued", "DZA"),
    ("El Tarf", "DZA"),
    ("Ghardaïa", "DZA"),
    ("Guelma", "DZA"),
    ("Illizi", "DZA"),
    ("Jijel", "DZA"),
    ("Khenchela", "DZA"),
    ("Laghouat", "DZA"),
    ("M'sila", "DZA"),
    ("Mascara", "DZA"),
    ("Mila", "DZA"),
    ("Mostaganem", "DZA"),
    ("Médéa", "DZA"),
    ("Naama", "DZA"),
    ("Oran", "DZA"),
    ("Ouargla", "DZA"),
    ("Oum el Bouaghi", "DZA"),
    ("Relizane", "DZA"),
    ("Saïda", "DZA"),
    ("Sidi Bel Abbès", "DZA"),
    ("Skikda", "DZA"),
    ("Souk Ahras", "DZA"),
    ("Sétif", "DZA"),
    ("Tamanrasset", "DZA"),
    ("Tiaret", "DZA"),
    ("Tindouf", "DZA"),
    ("Tipaza", "DZA"),
    ("Tissemsilt", "DZA"),
    ("Tizi Ouzou", "DZA"),
    ("Tlemcen", "DZA"),
    ("Tébessa", "DZA"),
    // Ecuador
    ("Azuay", "ECU"),
    ("Bolívar", "ECU"),
    ("Carchi", "ECU"),
    ("Cañar", "ECU"),
    ("Chimborazo", "ECU"),
    ("Cotopaxi", "ECU"),
    ("El Oro", "ECU"),
    ("Esmeraldas", "ECU"),
    ("Galápagos", "ECU"),
    ("Guayas", "ECU"),
    ("Imbabura", "ECU"),
    ("Loja", "ECU"),
    ("Los Ríos", "ECU"),
    ("Manabí", "ECU"),
    ("Morona Santiago", "ECU"),
    ("Napo", "ECU"),
    ("Orellana", "ECU"),
    ("Pastaza", "ECU"),
    ("Pichincha", "ECU"),
    ("Santa Elena", "ECU"),
    ("Santo Domingo de los Tsáchilas", "ECU"),
    ("Sucumbíos", "ECU"),
    ("Tungurahua", "ECU"),
    ("Zamora Chinchipe", "ECU"),
    // Egypt
    ("Ad Daqahlīyah", "EGY"),
    ("Al Baḩr al Aḩmar", "EGY"),
    ("Al Buḩayrah", "EGY"),
    ("Al Fayyūm", "EGY"),
    ("Al Gharbīyah", "EGY"),
    ("Al Iskandarīyah", "EGY"),
    ("Al Ismā'īlīyah", "EGY"),
    ("Al Jīzah", "EGY"),
    ("Al Minyā", "EGY"),
    ("Al Minūfīyah", "EGY"),
    ("Al Qalyūbīyah", "EGY"),
    ("Al Qāhirah", "EGY"),
    ("Al Uqşur", "EGY"),
    ("Al Wādī al Jadīd", "EGY"),
    ("As Suways", "EGY"),
    ("Ash Sharqīyah", "EGY"),
    ("Aswān", "EGY"),
    ("Asyūţ", "EGY"),
    ("Banī Suwayf", "EGY"),
    ("Būr Sa‘īd", "EGY"),
    ("Dumyāţ", "EGY"),
    ("Janūb Sīnā'", "EGY"),
    ("Kafr ash Shaykh", "EGY"),
    ("Maţrūḩ", "EGY"),
    ("Qinā", "EGY"),
    ("Shamāl Sīnā'", "EGY"),
    ("Sūhāj", "EGY"),
    // Eritrea
    ("Al Awsaţ", "ERI"),
    ("Al Janūbī", "ERI"),
    ("Ansabā", "ERI"),
    ("Debubawi K’eyyĭḥ Baḥri", "ERI"),
    ("Gash-Barka", "ERI"),
    ("Semienawi K’eyyĭḥ Baḥri", "ERI"),
    // Spain
    ("A Coruña [La Coruña]", "ESP"),
    ("Alacant*", "ESP"),
    ("Albacete", "ESP"),
    ("Almería", "ESP"),
    ("Andalucía", "ESP"),
    ("Araba*", "ESP"),
    ("Aragón", "ESP"),
    ("Asturias", "ESP"),
    ("Badajoz", "ESP"),
    ("Barcelona [Barcelona]", "ESP"),
    ("Bizkaia", "ESP"),
    ("Burgos", "ESP"),
    ("Canarias", "ESP"),
    ("Cantabria", "ESP"),
    ("Castelló*", "ESP"),
    ("Castilla y León", "ESP"),
    ("Castilla-La Mancha", "ESP"),
    ("Catalunya [Cataluña]", "ESP"),
    ("Ceuta", "ESP"),
    ("Ciudad Real", "ESP"),
    ("Cuenca", "ESP"),
    ("Cáceres", "ESP"),
    ("Cádiz", "ESP"),
    ("Córdoba", "ESP"),
    ("Euskal Herria", "ESP"),
    ("Extremadura", "ESP"),
    ("Galicia [Galicia]", "ESP"),
    ("Gipuzkoa", "ESP"),
    ("Girona [Gerona]", "ESP"),
    ("Granada", "ESP"),
    ("Guadalajara", "ESP"),
    ("Huelva", "ESP"),
    ("Huesca", "ESP"),
    ("Illes Balears [Islas Baleares]", "ESP"),
    ("Jaén", "ESP"),
    ("La Rioja", "ESP"),
    ("Las Palmas", "ESP"),
    ("León", "ESP"),
    ("Lleida [Lérida]", "ESP"),
    ("Lugo [Lugo]", "ESP"),
    ("Madrid", "ESP"),
    ("Melilla", "ESP"),
    ("Murcia", "ESP"),
    ("Málaga", "ESP"),
    ("Nafarroa*", "ESP"),
    ("Nafarroako Foru Komunitatea*", "ESP"),
    ("Ourense [Orense]", "ESP"),
    ("Palencia", "ESP"),
    ("Pontevedra [Pontevedra]", "ESP"),
    ("Salamanca", "ESP"),
    ("Santa Cruz de Tenerife", "ESP"),
    ("Segovia", "ESP"),
    ("Sevilla", "ESP"),
    ("Soria", "ESP"),
    ("Tarragona [Tarragona]", "ESP"),
    ("Teruel", "ESP"),
    ("Toledo", "ESP"),
    ("Valencia", "ESP"),
    ("Valladolid", "ESP"),
    ("Zamora", "ESP"),
    ("Zaragoza", "ESP"),
    ("Ávila", "ESP"),
    // Estonia
    ("Alutaguse", "EST"),
    ("Anija", "EST"),
    ("Antsla", "EST"),
    ("Elva", "EST"),
    ("Haapsalu", "EST"),
    ("Haljala", "EST"),
    ("Harjumaa", "EST"),
    ("Harku", "EST"),
    ("Hiiumaa", "EST"),
    ("Häädemeeste", "EST"),
    ("Ida-Virumaa", "EST"),
    ("Järva", "EST"),
    ("Järvamaa", "EST"),
    ("Jõelähtme", "EST"),
    ("Jõgeva", "EST"),
    ("Jõgevamaa", "EST"),
    ("Jõhvi", "EST"),
    ("Kadrina", "EST"),
    ("Kambja", "EST"),
    ("Kanepi", "EST"),
    ("Kastre", "EST"),
    ("Kehtna", "EST"),
    ("Keila", "EST"),
    ("Kihnu", "EST"),
    ("Kiili", "EST"),
    ("Kohila", "EST"),
    ("Kohtla-Järve", "EST"),
    ("Kose", "EST"),
    ("Kuusalu", "EST"),
    ("Loksa", "EST"),
    ("Luunja", "EST"),
    ("Lääne-Harju", "EST"),
    ("Lääne-Nigula", "EST"),
    ("Lääne-Virumaa", "EST"),
    ("Läänemaa", "EST"),
    ("Lääneranna", "EST"),
    ("Lüganuse", "EST"),
    ("Maardu", "EST"),
    ("Muhu", "EST"),
    ("Mulgi", "EST"),
    ("Mustvee", "EST"),
    ("Märjamaa", "EST"),
    ("Narva", "EST"),
    ("Narva-Jõesuu", "EST"),
    ("Nõo", "EST"),
    ("Otepää", "EST"),
    ("Paide", "EST"),
    ("Peipsiääre", "EST"),
    ("Pärnu", "EST"),
    ("Pärnumaa", "EST"),
    ("Põhja-Pärnumaa", "EST"),
    ("Põhja-Sakala", "EST"),
    ("Põltsamaa", "EST"),
    ("Põlva", "EST"),
    ("Põlvamaa", "EST"),
    ("Raasiku", "EST"),
    ("Rae", "EST"),
    ("Rakvere", "EST"),
    ("Rapla", "EST"),
    ("Raplamaa", "EST"),
    ("Ruhnu", "EST"),
    ("Räpina", "EST"),
    ("Rõuge", "EST"),
    ("Saarde", "EST"),
    ("Saaremaa", "EST"),
    ("Saku", "EST"),
    ("Saue", "EST"),
    ("Setomaa", "EST"),
    ("Sillamäe", "EST"),
    ("Tallinn", "EST"),
    ("Tapa", "EST"),
    ("Tartu", "EST"),
    ("Tartumaa", "EST"),
    ("Toila", "EST"),
    ("Tori", "EST"),
    ("Tõrva", "EST"),
    ("Türi", "EST"),
    ("Valga", "EST"),
    ("Valgamaa", "EST"),
    ("Viimsi", "EST"),
    ("Viljandi", "EST"),
    ("Viljandimaa", "EST"),
    ("Vinni", "EST"),
    ("Viru-Nigula", "EST"),
    ("Vormsi", "EST"),
    ("Väike-Maarja", "EST"),
    ("Võru", "EST"),
    ("Võrumaa", "EST"),
    // Ethiopia
    ("Addis Ababa", "ETH"),
    ("Afar", "ETH"),
    ("Amara", "ETH"),
    ("Benshangul-Gumaz", "ETH"),
    ("Dire Dawa", "ETH"),
    ("Gambela Peoples", "ETH"),
    ("Harari People", "ETH"),
    ("Oromia", "ETH"),
    ("Somali", "ETH"),
    ("Tigrai", "ETH"),
    // Finland
    ("Etelä-Karjala", "FIN"),
    ("Etelä-Pohjanmaa", "FIN"),
    ("Etelä-Savo", "FIN"),
    ("Kainuu", "FIN"),
    ("Kanta-Häme", "FIN"),
    ("Keski-Pohjanmaa", "FIN"),
    ("Keski-Suomi", "FIN"),
    ("Kymenlaakso", "FIN"),
    ("Lappi", "FIN"),
    ("Pirkanmaa", "FIN"),
    ("Pohjanmaa", "FIN"),
    ("Pohjois-Karjala", "FIN"),
    ("Pohjois-Pohjanmaa", "FIN"),
    ("Pohjois-Savo", "FIN"),
    ("Päijät-Häme", "FIN"),
    ("Satakunta", "FIN"),
    ("Uusimaa", "FIN"),
    ("Varsinais-Suomi", "FIN"),
    ("Åland", "FIN"),
    // Fiji
    ("Ba", "FJI"),
    ("Bua", "FJI"),
    ("Cakaudrove", "FJI"),
    ("Central", "FJI"),
    ("Eastern", "FJI"),
    ("Kadavu", "FJI"),
    ("Lau", "FJI"),
    ("Lomaiviti", "FJI"),
    ("Macuata", "FJI"),
    ("Nadroga and Navosa", "FJI"),
    ("Naitasiri", "FJI"),
    ("Namosi", "FJI"),
    ("Northern", "FJI"),
    ("Ra", "FJI"),
    ("Rewa", "FJI"),
    ("Rotuma", "FJI"),
    ("Serua", "FJI"),
    ("Tailevu", "FJI"),
    ("Western", "FJI"),
    // France
    ("Ain", "FRA"),
    ("Aisne", "FRA"),
    ("Allier", "FRA"),
    ("Alpes-Maritimes", "FRA"),
    ("Alpes-de-Haute-Provence", "FRA"),
    ("Ardennes", "FRA"),
    ("Ardèche", "FRA"),
    ("Ariège", "FRA"),
    ("Aube", "FRA"),
    ("Aude", "FRA"),
    ("Auvergne-Rhône-Alpes", "FRA"),
    ("Aveyron", "FRA"),
    ("Bas-Rhin", "FRA"),
    ("Bouches-du-Rhône", "FRA"),
    ("Bourgogne-Franche-Comté", "FRA"),
    ("Bretagne", "FRA"),
    ("Calvados", "FRA"),
    ("Cantal", "FRA"),
    ("Centre-Val de Loire", "FRA"),
    ("Charente", "FRA"),
    ("Charente-Maritime", "FRA"),
    ("Cher", "FRA"),
    ("Clipperton", "FRA"),
    ("Corrèze", "FRA"),
    ("Corse", "FRA"),
    ("Corse-du-Sud", "FRA"),
    ("Creuse", "FRA"),
    ("Côte-d'Or", "FRA"),
    ("Côtes-d'Armor", "FRA"),
    ("Deux-Sèvres", "FRA"),
    ("Dordogne", "FRA"),
    ("Doubs", "FRA"),
    ("Drôme", "FRA"),
    ("Essonne", "FRA"),
    ("Eure", "FRA"),
    ("Eure-et-Loir", "FRA"),
    ("Finistère", "FRA"),
    ("Gard", "FRA"),
    ("Gers", "FRA"),
    ("Gironde", "FRA"),
    ("Grand-Est", "FRA"),
    ("Guadeloupe", "FRA"),
    ("Guyane (française)", "FRA"),
    ("Haut-Rhin", "FRA"),
    ("Haute-Corse", "FRA"),
    ("Haute-Garonne", "FRA"),
    ("Haute-Loire", "FRA"),
    ("Haute-Marne", "FRA"),
    ("Haute-Savoie", "FRA"),
    ("Haute-Saône", "FRA"),
    ("Haute-Vienne", "FRA"),
    ("Hautes-Alpes", "FRA"),
    ("Hautes-Pyrénées", "FRA"),
    ("Hauts-de-France", "FRA"),
    ("Hauts-de-Seine", "FRA"),
    ("Hérault", "FRA"),
    ("Ille-et-Vilaine", "FRA"),
    ("Indre", "FRA"),
    ("Indre-et-Loire", "FRA"),
    ("Isère", "FRA"),
    ("Jura", "FRA"),
    ("La Réunion", "FRA"),
    ("Landes", "FRA"),
    ("Loir-et-Cher", "FRA"),
    ("Loire", "FRA"),
    ("Loire-Atlantique", "FRA"),
    ("Loiret", "FRA"),
    ("Lot", "FRA"),
    ("Lot-et-Garonne", "FRA"),
    ("Lozère", "FRA"),
    ("Maine-et-Loire", "FRA"),
    ("Manche", "FRA"),
    ("Marne", "FRA"),
    ("Martinique", "FRA"),
    ("Mayenne", "FRA"),
    ("Mayotte", "FRA"),
    ("Meurthe-et-Moselle", "FRA"),
    ("Meuse", "FRA"),
    ("Morbihan", "FRA"),
    ("Moselle", "FRA"),
    ("Nièvre", "FRA"),
    ("Nord", "FRA"),
    ("Normandie", "FRA"),
    ("Nouvelle-Aquitaine", "FRA"),
    ("Nouvelle-Calédonie", "FRA"),
    ("Occitanie", "FRA"),
    ("Oise", "FRA"),
    ("Orne", "FRA"),
    ("Paris", "FRA"),
    ("Pas-de-Calais", "FRA"),
    ("Pays-de-la-Loire", "FRA"),
    ("Polynésie française", "FRA"),
    ("Provence-Alpes-Côte-d’Azur", "FRA"),
    ("Puy-de-Dôme", "FRA"),
    ("Pyrénées-Atlantiques", "FRA"),
    ("Pyrénées-Orientales", "FRA"),
    ("Rhône", "FRA"),
    ("Saint-Barthélemy", "FRA"),
    ("Saint-Martin", "FRA"),
    ("Saint-Pierre-et-Miquelon", "FRA"),
    ("Sarthe", "FRA"),
    ("Savoie", "FRA"),
    ("Saône-et-Loire", "FRA"),
    ("Seine-Maritime", "FRA"),
    ("Seine-Saint-Denis", "FRA"),
    ("Seine-et-Marne", "FRA"),
    ("Somme", "FRA"),
    ("Tarn", "FRA"),
    ("Tarn-et-Garonne", "FRA"),
    ("Terres australes françaises", "FRA"),
    ("Territoire de Belfort", "FRA"),
    ("Val-d'Oise", "FRA"),
    ("Val-de-Marne", "FRA"),
    ("Var", "FRA"),
    ("Vaucluse", "FRA"),
    ("Vendée", "FRA"),
    ("Vienne", "FRA"),
    ("Vosges", "FRA"),
    ("Wallis-et-Futuna", "FRA"),
    ("Yonne", "FRA"),
    ("Yvelines", "FRA"),
    ("Île-de-France", "FRA"),
    // Micronesia, Federated States of
    ("Chuuk", "FSM"),
    ("Kosrae", "FSM"),
    ("Pohnpei", "FSM"),
    ("Yap", "FSM"),
    // Gabon
    ("Estuaire", "GAB"),
    ("Haut-Ogooué", "GAB"),
    ("Moyen-Ogooué", "GAB"),
    ("Ngounié", "GAB"),
    ("Nyanga", "GAB"),
    ("Ogooué-Ivindo", "GAB"),
    ("Ogooué-Lolo", "GAB"),
    ("Ogooué-Maritime", "GAB"),
    ("Woleu-Ntem", "GAB"),
    // United Kingdom
    ("Aberdeen City", "GBR"),
    ("Aberdeenshire", "GBR"),
    ("Angus", "GBR"),
    ("Antrim and Newtownabbey", "GBR"),
    ("Ards and North Down", "GBR"),
    ("Argyll and Bute", "GBR"),
    ("Barking and Dagenham", "GBR"),
    ("Barnet", "GBR"),
    ("Barnsley", "GBR"),
    ("Bath and North East Somerset", "GBR"),
    ("Bedford", "GBR"),
    ("Belfast City", "GBR"),
    ("Bexley", "GBR"),
    ("Birmingham", "GBR"),
    ("Blackburn with Darwen", "GBR"),
    ("Blackpool", "GBR"),
    ("Blaenau Gwent", "GBR"),
    ("Bolton", "GBR"),
    ("Bracknell Forest", "GBR"),
    ("Bradford", "GBR"),
    ("Brent", "GBR"),
    ("Bridgend [Pen-y-bont ar Ogwr GB-POG]", "GBR"),
    ("Brighton and Hove", "GBR"),
    ("Bromley", "GBR"),
    ("Buckinghamshire", "GBR"),
    ("Bury", "GBR"),
    ("Caerphilly [Caerffili GB-CAF]", "GBR"),
    ("Calderdale", "GBR"),
    ("Cambridgeshire", "GBR"),
    ("Camden", "GBR"),
    ("Cardiff [Caerdydd GB-CRD]", "GBR"),
    ("Carmarthenshire [Sir Gaerfyrddin GB-GFY]", "GBR"),
    ("Causeway Coast and Glens", "GBR"),
    ("Central Bedfordshire", "GBR"),
    ("Ceredigion [Sir Ceredigion]", "GBR"),
    ("Cheshire East", "GBR"),
    ("Cheshire West and Chester", "GBR"),
    ("Clackmannanshire", "GBR"),
    ("Conwy", "GBR"),
    ("Cornwall", "GBR"),
    ("Coventry", "GBR"),
    ("Croydon", "GBR"),
    ("Cumbria", "GBR"),
    ("Darlington", "GBR"),
    ("Denbighshire [Sir Ddinbych GB-DDB]", "GBR"),
    ("Derby", "GBR"),
    ("Derbyshire", "GBR"),
    ("Derry and Strabane", "GBR"),
    ("Devon", "GBR"),
    ("Doncaster", "GBR"),
    ("Dorset", "GBR"),
    ("Dudley", "GBR"),
    ("Dumfries and Galloway", "GBR"),
    ("Dundee City", "GBR"),
    ("Ealing", "GBR"),
    ("East Ayrshire", "GBR"),
    ("East Dunbartonshire", "GBR"),
    ("East Lothian", "GBR"),
    ("East Renfrewshire", "GBR"),
    ("East Riding of Yorkshire", "GBR"),
    ("East Sussex", "GBR"),
    ("Eilean Siar", "GBR"),
    ("Enfield", "GBR"),
    ("England", "GBR"),
    ("Essex", "GBR"),
    ("Falkirk", "GBR"),
    ("Fermanagh and Omagh", "GBR"),
    ("Fife", "GBR"),
    ("Flintshire [Sir y Fflint GB-FFL]", "GBR"),
    ("Gateshead", "GBR"),
    ("Glasgow City", "GBR"),
    ("Gloucestershire", "GBR"),
    ("Greenwich", "GBR"),
    ("Gwynedd", "GBR"),
    ("Hackney", "GBR"),
    ("Halton", "GBR"),
    ("Hammersmith and Fulham", "GBR"),
    ("Hampshire", "GBR"),
    ("Haringey", "GBR"),
    ("Harrow", "GBR"),
    ("Hartlepool", "GBR"),
    ("Havering", "GBR"),
    ("Herefordshire", "GBR"),
    ("Hertfordshire", "GBR"),
    ("Highland", "GBR"),
    ("Hillingdon", "GBR"),
    ("Hounslow", "GBR"),
    ("Inverclyde", "GBR"),
    ("Isle of Anglesey [Sir Ynys Môn GB-YNM]", "GBR"),
    ("Isle of Wight", "GBR"),
    ("Isles of Scilly", "GBR"),
    ("Islington", "GBR"),
    ("Kensington and Chelsea", "GBR"),
    ("Kent", "GBR"),
    ("Kingston upon Hull", "GBR"),
    ("Kingston upon Thames", "GBR"),
    ("Kirklees", "GBR"),
    ("Knowsley", "GBR"),
    ("Lambeth", "GBR"),
    ("Lancashire", "GBR"),
    ("Leeds", "GBR"),
    ("Leicester", "GBR"),
    ("Leicestershire", "GBR"),
    ("Lewisham", "GBR"),
    ("Lincolnshire", "GBR"),
    ("Lisburn and Castlereagh", "GBR"),
    ("Liverpool", "GBR"),
    ("Luton", "GBR"),
    ("Manchester", "GBR"),
    ("Medway", "GBR"),
    ("Merthyr Tydfil [Merthyr Tudful GB-MTU]", "GBR"),
    ("Merton", "GBR"),
    ("Mid and East Antrim", "GBR"),
    ("Mid-Ulster", "GBR"),
    ("Middlesbrough", "GBR"),
    ("Midlothian", "GBR"),
    ("Milton Keynes", "GBR"),
    ("Monmouthshire [Sir Fynwy GB-FYN]", "GBR"),
    ("Moray", "GBR"),
    ("Neath Port Talbot [Castell-nedd Port Talbot GB-CTL]", "GBR"),
    ("Newcastle upon Tyne", "GBR"),
    ("Newham", "GBR"),
    ("Newport [Casnewydd GB-CNW]", "GBR"),
    ("Norfolk", "GBR"),
    ("North Ayrshire", "GBR"),
    ("North East Lincolnshire", "GBR"),
    ("North Lanarkshire", "GBR"),
    ("North Lincolnshire", "GBR"),
    ("North Somerset", "GBR"),
    ("North Tyneside", "GBR"),
    ("North Yorkshire", "GBR"),
    ("Northamptonshire", "GBR"),
    ("Northern Ireland", "GBR"),
    ("Northumberland", "GBR"),
    ("Nottingham", "GBR"),
    ("Nottinghamshire", "GBR"),
    ("Oldham", "GBR"),
    ("Orkney Islands", "GBR"),
    ("Oxfordshire", "GBR"),
    ("Pembrokeshire [Sir Benfro GB-BNF]", "GBR"),
    ("Perth and Kinross", "GBR"),
    ("Peterborough", "GBR"),
    ("Plymouth", "GBR"),
    ("Portsmouth", "GBR"),
    ("Powys", "GBR"),
    ("Reading", "GBR"),
    ("Redbridge", "GBR"),
    ("Redcar and Cleveland", "GBR"),
    ("Renfrewshire", "GBR"),
    ("Rhondda Cynon Taff [Rhondda CynonTaf]", "GBR"),
    ("Richmond upon Thames", "GBR"),
    ("Rochdale", "GBR"),
    ("Rotherham", "GBR"),
    ("Rutland", "GBR"),
    ("Salford", "GBR"),
    ("Sandwell", "GBR"),
    ("Scotland", "GBR"),
    ("Scottish Borders", "GBR"),
    ("Sefton", "GBR"),
    ("Sheffield", "GBR"),
    ("Shetland Islands", "GBR"),
    ("Shropshire", "GBR"),
    ("Slough", "GBR"),
    ("Solihull", "GBR"),
    ("Somerset", "GBR"),
    ("South Ayrshire", "GBR"),
    ("South Gloucestershire", "GBR"),
    ("South Lanarkshire", "GBR"),
    ("South Tyneside", "GBR"),
    ("Southampton", "GBR"),
    ("Southend-on-Sea", "GBR"),
    ("Southwark", "GBR"),
    ("St. Helens", "GBR"),
    ("Staffordshire", "GBR"),
    ("Stirling", "GBR"),
    ("Stockport", "GBR"),
    ("Stockton-on-Tees", "GBR"),
    ("Stoke-on-Trent", "GBR"),
    ("Suffolk", "GBR"),
    ("Sunderland", "GBR"),
    ("Surrey", "GBR"),
    ("Sutton", "GBR"),
    ("Swansea [Abertawe GB-ATA]", "GBR"),
    ("Swindon", "GBR"),
    ("Tameside", "GBR"),
    ("Telford and Wrekin", "GBR"),
    ("Thurrock", "GBR"),
    ("Torbay", "GBR"),
    ("Torfaen [Tor-faen]", "GBR"),
    ("Tower Hamlets", "GBR"),
    ("Trafford", "GBR"),
    ("Wakefield", "GBR"),
    ("Wales [Cymru GB-CYM]", "GBR"),
    ("Walsall", "GBR"),
    ("Waltham Forest", "GBR"),
    ("Wandsworth", "GBR"),
    ("Warrington", "GBR"),
    ("Warwickshire", "GBR"),
    ("West Berkshire", "GBR"),
    ("West Dunbartonshire", "GBR"),
    ("West Lothian", "GBR"),
    ("West Sussex", "GBR"),
    ("Westminster", "GBR"),
    ("Wigan", "GBR"),
    ("Wiltshire", "GBR"),
    ("Windsor and Maidenhead", "GBR"),
    ("Wirral", "GBR"),
    ("Wokingham", "GBR"),
    ("Wolverhampton", "GBR"),
    ("Worcestershire", "GBR"),
    ("Wrexham [Wrecsam GB-WRC]", "GBR"),
    ("York", "GBR"),
    // Georgia
    ("Abkhazia", "GEO"),
    ("Ajaria", "GEO"),
    ("Guria", "GEO"),
    ("Imereti", "GEO"),
    ("K'akheti", "GEO"),
    ("Kvemo Kartli", "GEO"),
    ("Mtskheta-Mtianeti", "GEO"),
    ("Rach'a-Lechkhumi-Kvemo Svaneti", "GEO"),
    ("Samegrelo-Zemo Svaneti", "GEO"),
    ("Samtskhe-Javakheti", "GEO"),
    ("Shida Kartli", "GEO"),
    ("Tbilisi", "GEO"),
    // Ghana
    ("Ahafo", "GHA"),
    ("Ashanti", "GHA"),
    ("Bono", "GHA"),
    ("Bono East", "GHA"),
    ("Central", "GHA"),
    ("Eastern", "GHA"),
    ("Greater Accra", "GHA"),
    ("North East", "GHA"),
    ("Northern", "GHA"),
    ("Oti", "GHA"),
    ("Savannah", "GHA"),
    ("Upper East", "GHA"),
    ("Upper West", "GHA"),
    ("Volta", "GHA"),
    ("Western", "GHA"),
    ("Western North", "GHA"),
    // Guinea
    ("Beyla", "GIN"),
    ("Boffa", "GIN"),
    ("Boké", "GIN"),
    ("Conakry", "GIN"),
    ("Coyah", "GIN"),
    ("Dabola", "GIN"),
    ("Dalaba", "GIN"),
    ("Dinguiraye", "GIN"),
    ("Dubréka", "GIN"),
    ("Faranah", "GIN"),
    ("Forécariah", "GIN"),
    ("Fria", "GIN"),
    ("Gaoual", "GIN"),
    ("Guékédou", "GIN"),
    ("Kankan", "GIN"),
    ("Kindia", "GIN"),
    ("Kissidougou", "GIN"),
    ("Koubia", "GIN"),
    ("Koundara", "GIN"),
    ("Kouroussa", "GIN"),
    ("Kérouané", "GIN"),
    ("Labé", "GIN"),
    ("Lola", "GIN"),
    ("Lélouma", "GIN"),
    ("Macenta", "GIN"),
    ("Mali", "GIN"),
    ("Mamou", "GIN"),
    ("Mandiana", "GIN"),
    ("Nzérékoré", "GIN"),
    ("Pita", "GIN"),
    ("Siguiri", "GIN"),
    ("Tougué", "GIN"),
    ("Télimélé", "GIN"),
    ("Yomou", "GIN"),
    // Gambia
    ("Banjul", "GMB"),
    ("Central River", "GMB"),
    ("Lower River", "GMB"),
    ("North Bank", "GMB"),
    ("Upper River", "GMB"),
    ("Western", "GMB"),
    // Guinea-Bissau
    ("Bafatá", "GNB"),
    ("Biombo", "GNB"),
    ("Bissau", "GNB"),
    ("Bolama / Bijagós", "GNB"),
    ("Cacheu", "GNB"),
    ("Gabú", "GNB"),
    ("Leste", "GNB"),
    ("Norte", "GNB"),
    ("Oio", "GNB"),
    ("Quinara", "GNB"),
    ("Sul", "GNB"),
    ("Tombali", "GNB"),
    // Equatorial Guinea
    ("Annobon", "GNQ"),
    ("Bioko Nord", "GNQ"),
    ("Bioko Sud", "GNQ"),
    ("Centro Sud", "GNQ"),
    ("Djibloho", "GNQ"),
    ("Kié-Ntem", "GNQ"),
    ("Litoral", "GNQ"),
    ("Região Continental", "GNQ"),
    ("Região Insular", "GNQ"),
    ("Wele-Nzas", "GNQ"),
    // Greece
    ("Anatolikí Makedonía kai Thráki", "GRC"),
    ("Attikí", "GRC"),
    ("Dytikí Elláda", "GRC"),
    ("Dytikí Makedonía", "GRC"),
    ("Ionía Nísia", "GRC"),
    ("Kentrikí Makedonía", "GRC"),
    ("Kríti", "GRC"),
    ("Nótio Aigaío", "GRC"),
    ("Pelopónnisos", "GRC"),
    ("Stereá Elláda", "GRC"),
    ("Thessalía", "GRC"),
    ("Vóreio Aigaío", "GRC"),
    ("Ágion Óros", "GRC"),
    ("Ípeiros", "GRC"),
    // Grenada
    ("Saint Andrew", "GRD"),
    ("Saint David", "GRD"),
    ("Saint George", "GRD"),
    ("Saint John", "GRD"),
    ("Saint Mark", "GRD"),
    ("Saint Patrick", "GRD"),
    ("Southern Grenadine Islands", "GRD"),
    // Greenland
    ("Avannaata Kommunia", "GRL"),
    ("Kommune Kujalleq", "GRL"),
    ("Kommune Qeqertalik", "GRL"),
    ("Kommuneqarfik Sermersooq", "GRL"),
    ("Qeqqata Kommunia", "GRL"),
    // Guatemala
    ("Alta Verapaz", "GTM"),
    ("Baja Verapaz", "GTM"),
    ("Chimaltenango", "GTM"),
    ("Chiquimula", "GTM"),
    ("El Progreso", "GTM"),
    ("Escuintla", "GTM"),
    ("Guatemala", "GTM"),
    ("Huehuetenango", "GTM"),
    ("Izabal", "GTM"),
    ("Jalapa", "GTM"),
    ("Jutiapa", "GTM"),
    ("Petén", "GTM"),
    ("Quetzaltenango", "GTM"),
    ("Quiché", "GTM"),
    ("Retalhuleu", "GTM"),
    ("Sacatepéquez", "GTM"),
    ("San Marcos", "GTM"),
    ("Santa Rosa", "GTM"),
    ("Sololá", "GTM"),
    ("Suchitepéquez", "GTM"),
    ("Totonicapán", "GTM"),
    ("Zacapa", "GTM"),
    // Guyana
    ("Barima-Waini", "GUY"),
    ("Cuyuni-Mazaruni", "GUY"),
    ("Demerara-Mahaica", "GUY"),
    ("East Berbice-Corentyne", "GUY"),
    ("Essequibo Islands-West Demerara", "GUY"),
    ("Mahaica-Berbice", "GUY"),
    ("Pomeroon-Supenaam", "GUY"),
    ("Potaro-Siparuni", "GUY"),
    ("Upper Demerara-Berbice", "GUY"),
    ("Upper Takutu-Upper Essequibo", "GUY"),
    // Honduras
    ("Atlántida", "HND"),
    ("Choluteca", "HND"),
    ("Colón", "HND"),
    ("Comayagua", "HND"),
    ("Copán", "HND"),
    ("Cortés", "HND"),
    ("El Paraíso", "HND"),
    ("Francisco Morazán", "HND"),
    ("Gracias a Dios", "HND"),
    ("Intibucá", "HND"),
    ("Islas de la Bahía", "HND"),
    ("La Paz", "HND"),
    ("Lempira", "HND"),
    ("Ocotepeque", "HND"),
    ("Olancho", "HND"),
    ("Santa Bárbara", "HND"),
    ("Valle", "HND"),
    ("Yoro", "HND"),
    // Croatia
    ("Bjelovarsko-bilogorska županija", "HRV"),
    ("Brodsko-posavska županija", "HRV"),
    ("Dubrovačko-neretvanska županija", "HRV"),
    ("Grad Zagreb", "HRV"),
    ("Istarska županija", "HRV"),
    ("Karlovačka županija", "HRV"),
    ("Koprivničko-križevačka županija", "HRV"),
    ("Krapinsko-zagorska županija", "HRV"),
    ("Ličko-senjska županija", "HRV"),
    ("Međimurska županija", "HRV"),
    ("Osječko-baranjska županija", "HRV"),
    ("Požeško-slavonska županija", "HRV"),
    ("Primorsko-goranska županija", "HRV"),
    ("Sisačko-moslavačka županija", "HRV"),
    ("Splitsko-dalmatinska županija", "HRV"),
    ("Varaždinska županija", "HRV"),
    ("Virovitičko-podravska županija", "HRV"),
    ("Vukovarsko-srijemska županija", "HRV"),
    ("Zadarska županija", "HRV"),
    ("Zagrebačka županija", "HRV"),
    ("Šibensko-kninska županija", "HRV"),
    // Haiti
    ("Artibonite", "HTI"),
    ("Centre", "HTI"),
    ("Grandans", "HTI"),
    ("Lwès", "HTI"),
    ("Nip", "HTI"),
    ("Nord", "HTI"),
    ("Nord-Est", "HTI"),
    ("Nord-Ouest", "HTI"),
    ("Sid", "HTI"),
    ("Sidès", "HTI"),
    // Hungary
    ("Baranya", "HUN"),
    ("Borsod-Abaúj-Zemplén", "HUN"),
    ("Budapest", "HUN"),
    ("Bács-Kiskun", "HUN"),
    ("Békés", "HUN"),
    ("Békéscsaba", "HUN"),
    ("Csongrád", "HUN"),
    ("Debrecen", "HUN"),
    ("Dunaújváros", "HUN"),
    ("Eger", "HUN"),
    ("Fejér", "HUN"),
    ("Győr", "HUN"),
    ("Győr-Moson-Sopron", "HUN"),
    ("Hajdú-Bihar", "HUN"),
    ("Heves", "HUN"),
    ("Hódmezővásárhely", "HUN"),
    ("Jász-Nagykun-Szolnok", "HUN"),
    ("Kaposvár", "HUN"),
    ("Kecskemét", "HUN"),
    ("Komárom-Esztergom", "HUN"),
    ("Miskolc", "HUN"),
    ("Nagykanizsa", "HUN"),
    ("Nyíregyháza", "HUN"),
    ("Nógrád", "HUN"),
    ("Pest", "HUN"),
    ("Pécs", "HUN"),
    ("Salgótarján", "HUN"),
    ("Somogy", "HUN"),
    ("Sopron", "HUN"),
    ("Szabolcs-Szatmár-Bereg", "HUN"),
    ("Szeged", "HUN"),
    ("Szekszárd", "HUN"),
    ("Szolnok", "HUN"),
    ("Szombathely", "HUN"),
    ("Székesfehérvár", "HUN"),
    ("Tatabánya", "HUN"),
    ("Tolna", "HUN"),
    ("Vas", "HUN"),
    ("Veszprém", "HUN"),
    ("Zala", "HUN"),
    ("Zalaegerszeg", "HUN"),
    ("Érd", "HUN"),
    // Indonesia
    ("Aceh", "IDN"),
    ("Bali", "IDN"),
    ("Banten", "IDN"),
    ("Bengkulu", "IDN"),
    ("Gorontalo", "IDN"),
    ("Jakarta Raya", "IDN"),
    ("Jambi", "IDN"),
    ("Jawa", "IDN"),
    ("Jawa Barat", "IDN"),
    ("Jawa Tengah", "IDN"),
    ("Jawa Timur", "IDN"),
    ("Kalimantan", "IDN"),
    ("Kalimantan Barat", "IDN"),
    ("Kalimantan Selatan", "IDN"),
    ("Kalimantan Tengah", "IDN"),
    ("Kalimantan Timur", "IDN"),
    ("Kalimantan Utara", "IDN"),
    ("Kepulauan Bangka Belitung", "IDN"),
    ("Kepulauan Riau", "IDN"),
    ("Lampung", "IDN"),
    ("Maluku", "IDN"),
    ("Maluku Utara", "IDN"),
    ("Nusa Tenggara", "IDN"),
    ("Nusa Tenggara Barat", "IDN"),
    ("Nusa Tenggara Timur", "IDN"),
    ("Papua", "IDN"),
    ("Papua Barat", "IDN"),
    ("Riau", "IDN"),
    ("Sulawesi", "IDN"),
    ("Sulawesi Barat", "IDN"),
    ("Sulawesi Selatan", "IDN"),
    ("Sulawesi Tengah", "IDN"),
    ("Sulawesi Tenggara", "IDN"),
    ("Sulawesi Utara", "IDN"),
    ("Sumatera", "IDN"),
    ("Sumatera Barat", "IDN"),
    ("Sumatera Selatan", "IDN"),
    ("Sumatera Utara", "IDN"),
    ("Yogyakarta", "IDN"),
    // India
    ("Andaman and Nicobar Islands", "IND"),
    ("Andhra Pradesh", "IND"),
    ("Arunāchal Pradesh", "IND"),
    ("Assam", "IND"),
    ("Bihār", "IND"),
    ("Chandīgarh", "IND"),
    ("Chhattīsgarh", "IND"),
    ("Delhi", "IND"),
    ("Dādra and Nagar Haveli and Damān and Diu", "IND"),
    ("Goa", "IND"),
    ("Gujarāt", "IND"),
    ("Haryāna", "IND"),
    ("Himāchal Pradesh", "IND"),
    ("Jammu and Kashmīr", "IND"),
    ("Jhārkhand", "IND"),
    ("Karnātaka", "IND"),
    ("Kerala", "IND"),
    ("Ladākh", "IND"),
    ("Lakshadweep", "IND"),
    ("Madhya Pradesh", "IND"),
    ("Mahārāshtra", "IND"),
    ("Manipur", "IND"),
    ("Meghālaya", "IND"),
    ("Mizoram", "IND"),
    ("Nāgāland", "IND"),
    ("Odisha", "IND"),
    ("Puducherry", "IND"),
    ("Punjab", "IND"),
    ("Rājasthān", "IND"),
    ("Sikkim", "IND"),
    ("Tamil Nādu", "IND"),
    ("Telangāna", "IND"),
    ("Tripura", "IND"),
    ("Uttar Pradesh", "IND"),
    ("Uttarākhand", "IND"),
    ("West Bengal", "IND"),
    // Ireland
    ("Carlow", "IRL"),
    ("Cavan", "IRL"),
    ("Clare", "IRL"),
    ("Connaught", "IRL"),
    ("Cork", "IRL"),
    ("Donegal", "IRL"),
    ("Dublin", "IRL"),
    ("Galway", "IRL"),
    ("Kerry", "IRL"),
    ("Kildare", "IRL"),
    ("Kilkenny", "IRL"),
    ("Laois", "IRL"),
    ("Leinster", "IRL"),
    ("Leitrim", "IRL"),
    ("Limerick", "IRL"),
    ("Longford", "IRL"),
    ("Louth", "IRL"),
    ("Mayo", "IRL"),
    ("Meath", "IRL"),
    ("Monaghan", "IRL"),
    ("Munster", "IRL"),
    ("Offaly", "IRL"),
    ("Roscommon", "IRL"),
    ("Sligo", "IRL"),
    ("Tipperary", "IRL"),
    ("Ulster", "IRL"),
    ("Waterford", "IRL"),
    ("Westmeath", "IRL"),
    ("Wexford", "IRL"),
    ("Wicklow", "IRL"),
    // Iran, Islamic Republic of
    ("Alborz", "IRN"),
    ("Ardabīl", "IRN"),
    ("Būshehr", "IRN"),
    ("Chahār Maḩāl va Bakhtīārī", "IRN"),
    ("Eşfahān", "IRN"),
    ("Fārs", "IRN"),
    ("Golestān", "IRN"),
    ("Gīlān", "IRN"),
    ("Hamadān", "IRN"),
    ("Hormozgān", "IRN"),
    ("Kermān", "IRN"),
    ("Kermānshāh", "IRN"),
    ("Khorāsān-e Jonūbī", "IRN"),
    ("Khorāsān-e Raẕavī", "IRN"),
    ("Khorāsān-e Shomālī", "IRN"),
    ("Khūzestān", "IRN"),
    ("Kohgīlūyeh va Bowyer Aḩmad", "IRN"),
    ("Kordestān", "IRN"),
    ("Lorestān", "IRN"),
    ("Markazī", "IRN"),
    ("Māzandarān", "IRN"),
    ("Qazvīn", "IRN"),
    ("Qom", "IRN"),
    ("Semnān", "IRN"),
    ("Sīstān va Balūchestān", "IRN"),
    ("Tehrān", "IRN"),
    ("Yazd", "IRN"),
    ("Zanjān", "IRN"),
    ("Āz̄ārbāyjān-e Ghārbī", "IRN"),
    ("Āz̄ārbāyjān-e Shārqī", "IRN"),
    ("Īlām", "IRN"),
    // Iraq
    ("Al Anbār", "IRQ"),
    ("Al Başrah", "IRQ"),
    ("Al Muthanná", "IRQ"),
    ("Al Qādisīyah", "IRQ"),
    ("An Najaf", "IRQ"),
    ("Arbīl", "IRQ"),
    ("As Sulaymānīyah", "IRQ"),
    ("Baghdād", "IRQ"),
    ("Bābil", "IRQ"),
    ("Dahūk", "IRQ"),
    ("Dhī Qār", "IRQ"),
    ("Diyālá", "IRQ"),
    ("Karbalā’", "IRQ"),
    ("Kirkūk", "IRQ"),
    ("Maysān", "IRQ"),
    ("Nīnawá", "IRQ"),
    ("Wāsiţ", "IRQ"),
    ("Şalāḩ ad Dīn", "IRQ"),
    // Iceland
    ("Akrahreppur", "ISL"),
    ("Akraneskaupstaður", "ISL"),
    ("Akureyrarbær", "ISL"),
    ("Austurland", "ISL"),
    ("Bláskógabyggð", "ISL"),
    ("Blönduósbær", "ISL"),
    ("Bolungarvíkurkaupstaður", "ISL"),
    ("Borgarbyggð", "ISL"),
    ("Borgarfjarðarhreppur", "ISL"),
    ("Dalabyggð", "ISL"),
    ("Dalvíkurbyggð", "ISL"),
    ("Djúpavogshreppur", "ISL"),
    ("Eyja- og Miklaholtshreppur", "ISL"),
    ("Eyjafjarðarsveit", "ISL"),
    ("Fjallabyggð", "ISL"),
    ("Fjarðabyggð", "ISL"),
    ("Fljótsdalshreppur", "ISL"),
    ("Fljótsdalshérað", "ISL"),
    ("Flóahreppur", "ISL"),
    ("Garðabær", "ISL"),
    ("Grindavíkurbær", "ISL"),
    ("Grundarfjarðarbær", "ISL"),
    ("Grímsnes- og Grafningshreppur", "ISL"),
    ("Grýtubakkahreppur", "ISL"),
    ("Hafnarfjarðarkaupstaður", "ISL"),
    ("Helgafellssveit", "ISL"),
    ("Hrunamannahreppur", "ISL"),
    ("Hvalfjarðarsveit", "ISL"),
    ("Hveragerðisbær", "ISL"),
    ("Höfuðborgarsvæði", "ISL"),
    ("Hörgársveit", "ISL"),
    ("Húnavatnshreppur", "ISL"),
    ("Húnaþing vestra", "ISL"),
    ("Kaldrananeshreppur", "ISL"),
    ("Kjósarhreppur", "ISL"),
    ("Kópavogsbær", "ISL"),
    ("Langanesbyggð", "ISL"),
    ("Mosfellsbær", "ISL"),
    ("Mýrdalshreppur", "ISL"),
    ("Norðurland eystra", "ISL"),
    ("Norðurland vestra", "ISL"),
    ("Norðurþing", "ISL"),
    ("Rangárþing eystra", "ISL"),
    ("Rangárþing ytra", "ISL"),
    ("Reykhólahreppur", "ISL"),
    ("Reykjanesbær", "ISL"),
    ("Reykjavíkurborg", "ISL"),
    ("Seltjarnarnesbær", "ISL"),
    ("Seyðisfjarðarkaupstaður", "ISL"),
    ("Skaftárhreppur", "ISL"),
    ("Skagabyggð", "ISL"),
    ("Skeiða- og Gnúpverjahreppur", "ISL"),
    ("Skorradalshreppur", "ISL"),
    ("Skútustaðahreppur", "ISL"),
    ("Snæfellsbær", "ISL"),
    ("Strandabyggð", "ISL"),
    ("Stykkishólmsbær", "ISL"),
    ("Suðurland", "ISL"),
    ("Suðurnes", "ISL"),
    ("Suðurnesjabær", "ISL"),
    ("Svalbarðshreppur", "ISL"),
    ("Svalbarðsstrandarhreppur", "ISL"),
    ("Sveitarfélagið Hornafjörður", "ISL"),
    ("Sveitarfélagið Skagafjörður", "ISL"),
    ("Sveitarfélagið Skagaströnd", "ISL"),
    ("Sveitarfélagið Vogar", "ISL"),
    ("Sveitarfélagið Árborg", "ISL"),
    ("Sveitarfélagið Ölfus", "ISL"),
    ("Súðavíkurhreppur", "ISL"),
    ("Tjörneshreppur", "ISL"),
    ("Tálknafjarðarhreppur", "ISL"),
    ("Vestfirðir", "ISL"),
    ("Vestmannaeyjabær", "ISL"),
    ("Vesturbyggð", "ISL"),
    ("Vesturland", "ISL"),
    ("Vopnafjarðarhreppur", "ISL"),
    ("Árneshreppur", "ISL"),
    ("Ásahreppur", "ISL"),
    ("Ísafjarðarbær", "ISL"),
    ("Þingeyjarsveit", "ISL"),
    // Israel
    ("Al Awsaţ", "ISR"),
    ("Al Janūbī", "ISR"),
    ("Al Quds", "ISR"),
    ("Ash Shamālī", "ISR"),
    ("H̱efa", "ISR"),
    ("Tall Abīb", "ISR"),
    // Italy
    ("Abruzzo", "ITA"),
    ("Agrigento", "ITA"),
    ("Alessandria", "ITA"),
    ("Ancona", "ITA"),
    ("Arezzo", "ITA"),
    ("Ascoli Piceno", "ITA"),
    ("Asti", "ITA"),
    ("Avellino", "ITA"),
    ("Bari", "ITA"),
    ("Barletta-Andria-Trani", "ITA"),
    ("Basilicata", "ITA"),
    ("Belluno", "ITA"),
    ("Benevento", "ITA"),
    ("Bergamo", "ITA"),
    ("Biella", "ITA"),
    ("Bologna", "ITA"),
    ("Bolzano", "ITA"),
    ("Brescia", "ITA"),
    ("Brindisi", "ITA"),
    ("Cagliari", "ITA"),
    ("Calabria", "ITA"),
    ("Caltanissetta", "ITA"),
    ("Campania", "ITA"),
    ("Campobasso", "ITA"),
    ("Caserta", "ITA"),
    ("Catania", "ITA"),
    ("Catanzaro", "ITA"),
    ("Chieti", "ITA"),
    ("Como", "ITA"),
    ("Cosenza", "ITA"),
    ("Cremona", "ITA"),
    ("Crotone", "ITA"),
    ("Cuneo", "ITA"),
    ("Emilia-Romagna", "ITA"),
    ("Enna", "ITA"),
    ("Fermo", "ITA"),
    ("Ferrara", "ITA"),
    ("Firenze", "ITA"),
    ("Foggia", "ITA"),
    ("Forlì-Cesena", "ITA"),
    ("Friuli Venezia Giulia", "ITA"),
    ("Frosinone", "ITA"),
    ("Genova", "ITA"),
    ("Gorizia", "ITA"),
    ("Grosseto", "ITA"),
    ("Imperia", "ITA"),
    ("Isernia", "ITA"),
    ("L'Aquila", "ITA"),
    ("La Spezia", "ITA"),
    ("Latina", "ITA"),
    ("Lazio", "ITA"),
    ("Lecce", "ITA"),
    ("Lecco", "ITA"),
    ("Liguria", "ITA"),
    ("Livorno", "ITA"),
    ("Lodi", "ITA"),
    ("Lombardia", "ITA"),
    ("Lucca", "ITA"),
    ("Macerata", "ITA"),
    ("Mantova", "ITA"),
    ("Marche", "ITA"),
    ("Massa-Carrara", "ITA"),
    ("Matera", "ITA"),
    ("Messina", "ITA"),
    ("Milano", "ITA"),
    ("Modena", "ITA"),
    ("Molise", "ITA"),
    ("Monza e Brianza", "ITA"),
    ("Napoli", "ITA"),
    ("Novara", "ITA"),
    ("Nuoro", "ITA"),
    ("Oristano", "ITA"),
    ("Padova", "ITA"),
    ("Palermo", "ITA"),
    ("Parma", "ITA"),
    ("Pavia", "ITA"),
    ("Perugia", "ITA"),
    ("Pesaro e Urbino", "ITA"),
    ("Pescara", "ITA"),
    ("Piacenza", "ITA"),
    ("Piemonte", "ITA"),
    ("Pisa", "ITA"),
    ("Pistoia", "ITA"),
    ("Pordenone", "ITA"),
    ("Potenza", "ITA"),
    ("Prato", "ITA"),
    ("Puglia", "ITA"),
    ("Ragusa", "ITA"),
    ("Ravenna", "ITA"),
    ("Reggio Calabria", "ITA"),
    ("Reggio Emilia", "ITA"),
    ("Rieti", "ITA"),
    ("Rimini", "ITA"),
    ("Roma", "ITA"),
    ("Rovigo", "ITA"),
    ("Salerno", "ITA"),
    ("Sardegna", "ITA"),
    ("Sassari", "ITA"),
    ("Savona", "ITA"),
    ("Sicilia", "ITA"),
    ("Siena", "ITA"),
    ("Siracusa", "ITA"),
    ("Sondrio", "ITA"),
    ("Sud Sardegna", "ITA"),
    ("Taranto", "ITA"),
    ("Teramo", "ITA"),
    ("Terni", "ITA"),
    ("Torino", "ITA"),
    ("Toscana", "ITA"),
    ("Trapani", "ITA"),
    ("Trentino-Alto Adige", "ITA"),
    ("Trento", "ITA"),
    ("Treviso", "ITA"),
    ("Trieste", "ITA"),
    ("Udine", "ITA"),
    ("Umbria", "ITA"),
    ("Val d'Aoste", "ITA"),
    ("Varese", "ITA"),
    ("Veneto", "ITA"),
    ("Venezia", "ITA"),
    ("Verbano-Cusio-Ossola", "ITA"),
    ("Vercelli", "ITA"),
    ("Verona", "ITA"),
    ("Vibo Valentia", "ITA"),
    ("Vicenza", "ITA"),
    ("Viterbo", "ITA"),
    // Jamaica
    ("Clarendon", "JAM"),
    ("Hanover", "JAM"),
    ("Kingston", "JAM"),
    ("Manchester", "JAM"),
    ("Portland", "JAM"),
    ("Saint Andrew", "JAM"),
    ("Saint Ann", "JAM"),
    ("Saint Catherine", "JAM"),
    ("Saint Elizabeth", "JAM"),
    ("Saint James", "JAM"),
    ("Saint Mary", "JAM"),
    ("Saint Thomas", "JAM"),
    ("Trelawny", "JAM"),
    ("Westmoreland", "JAM"),
    // Jordan
    ("Al Balqā’", "JOR"),
    ("Al Karak", "JOR"),
    ("Al Mafraq", "JOR"),
    ("Al ‘Aqabah", "JOR"),
    ("Al ‘A̅şimah", "JOR"),
    ("Az Zarqā’", "JOR"),
    ("Aţ Ţafīlah", "JOR"),
    ("Irbid", "JOR"),
    ("Jarash", "JOR"),
    ("Ma‘ān", "JOR"),
    ("Mādabā", "JOR"),
    ("‘Ajlūn", "JOR"),
    // Japan
    ("Aichi", "JPN"),
    ("Akita", "JPN"),
    ("Aomori", "JPN"),
    ("Chiba", "JPN"),
    ("Ehime", "JPN"),
    ("Fukui", "JPN"),
    ("Fukuoka", "JPN"),
    ("Fukushima", "JPN"),
    ("Gifu", "JPN"),
    ("Gunma", "JPN"),
    ("Hiroshima", "JPN"),
    ("Hokkaido", "JPN"),
    ("Hyogo", "JPN"),
    ("Ibaraki", "JPN"),
    ("Ishikawa", "JPN"),
    ("Iwate", "JPN"),
    ("Kagawa", "JPN"),
    ("Kagoshima", "JPN"),
    ("Kanagawa", "JPN"),
    ("Kochi", "JPN"),
    ("Kumamoto", "JPN"),
    ("Kyoto", "JPN"),
    ("Mie", "JPN"),
    ("Miyagi", "JPN"),
    ("Miyazaki", "JPN"),
    ("Nagano", "JPN"),
    ("Nagasaki", "JPN"),
    ("Nara", "JPN"),
    ("Niigata", "JPN"),
    ("Oita", "JPN"),
    ("Okayama", "JPN"),
    ("Okinawa", "JPN"),
    ("Osaka", "JPN"),
    ("Saga", "JPN"),
    ("Saitama", "JPN"),
    ("Shiga", "JPN"),
    ("Shimane", "JPN"),
    ("Shizuoka", "JPN"),
    ("Tochigi", "JPN"),
    ("Tokushima", "JPN"),
    ("Tokyo", "JPN"),
    ("Tottori", "JPN"),
    ("Toyama", "JPN"),
    ("Wakayama", "JPN"),
    ("Yamagata", "JPN"),
    ("Yamaguchi", "JPN"),
    ("Yamanashi", "JPN"),
    // Kazakhstan
    ("Akmolinskaja oblast'", "KAZ"),
    ("Aktjubinskaja oblast'", "KAZ"),
    ("Almatinskaja oblast'", "KAZ"),
    ("Almaty", "KAZ"),
    ("Atyrauskaja oblast'", "KAZ"),
    ("Batys Qazaqstan oblysy", "KAZ"),
    ("Karagandinskaja oblast'", "KAZ"),
    ("Kostanajskaja oblast'", "KAZ"),
    ("Kyzylordinskaja oblast'", "KAZ"),
    ("Mangghystaū oblysy", "KAZ"),
    ("Nur-Sultan", "KAZ"),
    ("Pavlodar oblysy", "KAZ"),
    ("Severo-Kazahstanskaja oblast'", "KAZ"),
    ("Shyghys Qazaqstan oblysy", "KAZ"),
    ("Shymkent", "KAZ"),
    ("Turkestankaya oblast'", "KAZ"),
    ("Zhambyl oblysy", "KAZ"),
    // Kenya
    ("Baringo", "KEN"),
    ("Bomet", "KEN"),
    ("Bungoma", "KEN"),
    ("Busia", "KEN"),
    ("Elgeyo/Marakwet", "KEN"),
    ("Embu", "KEN"),
    ("Garissa", "KEN"),
    ("Homa Bay", "KEN"),
    ("Isiolo", "KEN"),
    ("Kajiado", "KEN"),
    ("Kakamega", "KEN"),
    ("Kericho", "KEN"),
    ("Kiambu", "KEN"),
    ("Kilifi", "KEN"),
    ("Kirinyaga", "KEN"),
    ("Kisii", "KEN"),
    ("Kisumu", "KEN"),
    ("Kitui", "KEN"),
    ("Kwale", "KEN"),
    ("Laikipia", "KEN"),
    ("Lamu", "KEN"),
    ("Machakos", "KEN"),
    ("Makueni", "KEN"),
    ("Mandera", "KEN"),
    ("Marsabit", "KEN"),
    ("Meru", "KEN"),
    ("Migori", "KEN"),
    ("Mombasa", "KEN"),
    ("Murang'a", "KEN"),
    ("Nairobi City", "KEN"),
    ("Nakuru", "KEN"),
    ("Nandi", "KEN"),
    ("Narok", "KEN"),
    ("Nyamira", "KEN"),
    ("Nyandarua", "KEN"),
    ("Nyeri", "KEN"),
    ("Samburu", "KEN"),
    ("Siaya", "KEN"),
    ("Taita/Taveta", "KEN"),
    ("Tana River", "KEN"),
    ("Tharaka-Nithi", "KEN"),
    ("Trans Nzoia", "KEN"),
    ("Turkana", "KEN"),
    ("Uasin Gishu", "KEN"),
    ("Vihiga", "KEN"),
    ("Wajir", "KEN"),
    ("West Pokot", "KEN"),
    // Kyrgyzstan
    ("Batken", "KGZ"),
    ("Bishkek Shaary", "KGZ"),
    ("Chuyskaya oblast'", "KGZ"),
    ("Dzhalal-Abadskaya oblast'", "KGZ"),
    ("Gorod Osh", "KGZ"),
    ("Issyk-Kul'skaja oblast'", "KGZ"),
    ("Naryn", "KGZ"),
    ("Osh", "KGZ"),
    ("Talas", "KGZ"),
    // Cambodia
    ("Baat Dambang", "KHM"),
    ("Banteay Mean Choăy", "KHM"),
    ("Kaeb", "KHM"),
    ("Kampong Chaam", "KHM"),
    ("Kampong Chhnang", "KHM"),
    ("Kampong Spueu", "KHM"),
    ("Kampong Thum", "KHM"),
    ("Kampot", "KHM"),
    ("Kandaal", "KHM"),
    ("Kaoh Kong", "KHM"),
    ("Kracheh", "KHM"),
    ("Mondol Kiri", "KHM"),
    ("Otdar Mean Chey", "KHM"),
    ("Pailin", "KHM"),
    ("Phnom Penh", "KHM"),
    ("Pousaat", "KHM"),
    ("Preah Sihanouk", "KHM"),
    ("Preah Vihear", "KHM"),
    ("Prey Veaeng", "KHM"),
    ("Rotanak Kiri", "KHM"),
    ("Siem Reab", "KHM"),
    ("Stoĕng Trêng", "KHM"),
    ("Svaay Rieng", "KHM"),
    ("Taakaev", "KHM"),
    ("Tbong Khmum", "KHM"),
    // Kiribati
    ("Gilbert Islands", "KIR"),
    ("Line Islands", "KIR"),
    ("Phoenix Islands", "KIR"),
    // Saint Kitts and Nevis
    ("Christ Church Nichola Town", "KNA"),
    ("Nevis", "KNA"),
    ("Saint Anne Sandy Point", "KNA"),
    ("Saint George Basseterre", "KNA"),
    ("Saint George Gingerland", "KNA"),
    ("Saint James Windward", "KNA"),
    ("Saint John Capisterre", "KNA"),
    ("Saint John Figtree", "KNA"),
    ("Saint Kitts", "KNA"),
    ("Saint Mary Cayon", "KNA"),
    ("Saint Paul Capisterre", "KNA"),
    ("Saint Paul Charlestown", "KNA"),
    ("Saint Peter Basseterre", "KNA"),
    ("Saint Thomas Lowland", "KNA"),
    ("Saint Thomas Middle Island", "KNA"),
    ("Trinity Palmetto Point", "KNA"),
    // Korea, Republic of
    ("Busan-gwangyeoksi", "KOR"),
    ("Chungcheongbuk-do", "KOR"),
    ("Chungcheongnam-do", "KOR"),
    ("Daegu-gwangyeoksi", "KOR"),
    ("Daejeon-gwangyeoksi", "KOR"),
    ("Gangwon-do", "KOR"),
    ("Gwangju-gwangyeoksi", "KOR"),
    ("Gyeonggi-do", "KOR"),
    ("Gyeongsangbuk-do", "KOR"),
    ("Gyeongsangnam-do", "KOR"),
    ("Incheon-gwangyeoksi", "KOR"),
    ("Jeju-teukbyeoljachido", "KOR"),
    ("Jeollabuk-do", "KOR"),
    ("Jeollanam-do", "KOR"),
    ("Sejong", "KOR"),
    ("Seoul-teukbyeolsi", "KOR"),
    ("Ulsan-gwangyeoksi", "KOR"),
    // Kuwait
    ("Al Aḩmadī", "KWT"),
    ("Al Farwānīyah", "KWT"),
    ("Al Jahrā’", "KWT"),
    ("Al ‘Āşimah", "KWT"),
    ("Mubārak al Kabīr", "KWT"),
    ("Ḩawallī", "KWT"),
    // Lao People's Democratic Republic
    ("Attapu", "LAO"),
    ("Bokèo", "LAO"),
    ("Bolikhamxai", "LAO"),
    ("Champasak", "LAO"),
    ("Houaphan", "LAO"),
    ("Khammouan", "LAO"),
    ("Louang Namtha", "LAO"),
    ("Louangphabang", "LAO"),
    ("Oudômxai", "LAO"),
    ("Phôngsali", "LAO"),
    ("Salavan", "LAO"),
    ("Savannakhét", "LAO"),
    ("Viangchan", "LAO"),
    ("Xaignabouli", "LAO"),
    ("Xaisômboun", "LAO"),
    ("Xiangkhouang", "LAO"),
    ("Xékong", "LAO"),
    // Lebanon
    ("Aakkâr", "LBN"),
    ("Al Biqā‘", "LBN"),
    ("Al Janūb", "LBN"),
    ("An Nabaţīyah", "LBN"),
    ("Ash Shimāl", "LBN"),
    ("Baalbek-Hermel", "LBN"),
    ("Bayrūt", "LBN"),
    ("Jabal Lubnān", "LBN"),
    // Liberia
    ("Bomi", "LBR"),
    ("Bong", "LBR"),
    ("Gbarpolu", "LBR"),
    ("Grand Bassa", "LBR"),
    ("Grand Cape Mount", "LBR"),
    ("Grand Gedeh", "LBR"),
    ("Grand Kru", "LBR"),
    ("Lofa", "LBR"),
    ("Margibi", "LBR"),
    ("Maryland", "LBR"),
    ("Montserrado", "LBR"),
    ("Nimba", "LBR"),
    ("River Cess", "LBR"),
    ("River Gee", "LBR"),
    ("Sinoe", "LBR"),
    // Libya
    ("Al Buţnān", "LBY"),
    ("Al Jabal al Akhḑar", "LBY"),
    ("Al Jabal al Gharbī", "LBY"),
    ("Al Jafārah", "LBY"),
    ("Al Jufrah", "LBY"),
    ("Al Kufrah", "LBY"),
    ("Al Marj", "LBY"),
    ("Al Marqab", "LBY"),
    ("Al Wāḩāt", "LBY"),
    ("An Nuqāţ al Khams", "LBY"),
    ("Az Zāwiyah", "LBY"),
    ("Banghāzī", "LBY"),
    ("Darnah", "LBY"),
    ("Ghāt", "LBY"),
    ("Mişrātah", "LBY"),
    ("Murzuq", "LBY"),
    ("Nālūt", "LBY"),
    ("Sabhā", "LBY"),
    ("Surt", "LBY"),
    ("Wādī al Ḩayāt", "LBY"),
    ("Wādī ash Shāţi’", "LBY"),
    ("Ţarābulus", "LBY"),
    // Saint Lucia
    ("Anse la Raye", "LCA"),
    ("Canaries", "LCA"),
    ("Castries", "LCA"),
    ("Choiseul", "LCA"),
    ("Dennery", "LCA"),
    ("Gros Islet", "LCA"),
    ("Laborie", "LCA"),
    ("Micoud", "LCA"),
    ("Soufrière", "LCA"),
    ("Vieux Fort", "LCA"),
    // Liechtenstein
    ("Balzers", "LIE"),
    ("Eschen", "LIE"),
    ("Gamprin", "LIE"),
    ("Mauren", "LIE"),
    ("Planken", "LIE"),
    ("Ruggell", "LIE"),
    ("Schaan", "LIE"),
    ("Schellenberg", "LIE"),
    ("Triesen", "LIE"),
    ("Triesenberg", "LIE"),
    ("Vaduz", "LIE"),
    // Sri Lanka
    ("Ampara", "LKA"),
    ("Anuradhapura", "LKA"),
    ("Badulla", "LKA"),
    ("Batticaloa", "LKA"),
    ("Central Province", "LKA"),
    ("Colombo", "LKA"),
    ("Eastern Province", "LKA"),
    ("Galle", "LKA"),
    ("Gampaha", "LKA"),
    ("Hambantota", "LKA"),
    ("Jaffna", "LKA"),
    ("Kalutara", "LKA"),
    ("Kandy", "LKA"),
    ("Kegalla", "LKA"),
    ("Kilinochchi", "LKA"),
    ("Kurunegala", "LKA"),
    ("Mannar", "LKA"),
    ("Matale", "LKA"),
    ("Matara", "LKA"),
    ("Monaragala", "LKA"),
    ("Mullaittivu", "LKA"),
    ("North Central Province", "LKA"),
    ("North Western Province", "LKA"),
    ("Northern Province", "LKA"),
    ("Nuwara Eliya", "LKA"),
    ("Polonnaruwa", "LKA"),
    ("Puttalam", "LKA"),
    ("Ratnapura", "LKA"),
    ("Sabaragamuwa Province", "LKA"),
    ("Southern Province", "LKA"),
    ("Trincomalee", "LKA"),
    ("Uva Province", "LKA"),
    ("Vavuniya", "LKA"),
    ("Western Province", "LKA"),
    // Lesotho
    ("Berea", "LSO"),
    ("Botha-Bothe", "LSO"),
    ("Leribe", "LSO"),
    ("Mafeteng", "LSO"),
    ("Maseru", "LSO"),
    ("Mohale's Hoek", "LSO"),
    ("Mokhotlong", "LSO"),
    ("Qacha's Nek", "LSO"),
    ("Quthing", "LSO"),
    ("Thaba-Tseka", "LSO"),
    // Lithuania
    ("Akmenė", "LTU"),
    ("Alytaus apskritis", "LTU"),
    ("Alytaus miestas", "LTU"),
    ("Alytus", "LTU"),
    ("Anykščiai", "LTU"),
    ("Birštono", "LTU"),
    ("Biržai", "LTU"),
    ("Druskininkai", "LTU"),
    ("Elektrėnai", "LTU"),
    ("Ignalina", "LTU"),
    ("Jonava", "LTU"),
    ("Joniškis", "LTU"),
    ("Jurbarkas", "LTU"),
    ("Kaišiadorys", "LTU"),
    ("Kalvarijos", "LTU"),
    ("Kaunas", "LTU"),
    ("Kauno apskritis", "LTU"),
    ("Kauno miestas", "LTU"),
    ("Kazlų Rūdos", "LTU"),
    ("Kelmė", "LTU"),
    ("Klaipėda", "LTU"),
    ("Klaipėdos apskritis", "LTU"),
    ("Klaipėdos miestas", "LTU"),
    ("Kretinga", "LTU"),
    ("Kupiškis", "LTU"),
    ("Kėdainiai", "LTU"),
    ("Lazdijai", "LTU"),
    ("Marijampolė", "LTU"),
    ("Marijampolės apskritis", "LTU"),
    ("Mažeikiai", "LTU"),
    ("Molėtai", "LTU"),
    ("Neringa", "LTU"),
    ("Pagėgiai", "LTU"),
    ("Pakruojis", "LTU"),
    ("Palangos miestas", "LTU"),
    ("Panevėžio apskritis", "LTU"),
    ("Panevėžio miestas", "LTU"),
    ("Panevėžys", "LTU"),
    ("Pasvalys", "LTU"),
    ("Plungė", "LTU"),
    ("Prienai", "LTU"),
    ("Radviliškis", "LTU"),
    ("Raseiniai", "LTU"),
    ("Rietavo", "LTU"),
    ("Rokiškis", "LTU"),
    ("Skuodas", "LTU"),
    ("Tauragė", "LTU"),
    ("Tauragės apskritis", "LTU"),
    ("Telšiai", "LTU"),
    ("Telšių apskritis", "LTU"),
    ("Trakai", "LTU"),
    ("Ukmergė", "LTU"),
    ("Utena", "LTU"),
    ("Utenos apskritis", "LTU"),
    ("Varėna", "LTU"),
    ("Vilkaviškis", "LTU"),
    ("Vilniaus apskritis", "LTU"),
    ("Vilniaus miestas", "LTU"),
    ("Vilnius", "LTU"),
    ("Visaginas", "LTU"),
    ("Zarasai", "LTU"),
    ("Šakiai", "LTU"),
    ("Šalčininkai", "LTU"),
    ("Šiauliai", "LTU"),
    ("Šiaulių apskritis", "LTU"),
    ("Šiaulių miestas", "LTU"),
    ("Šilalė", "LTU"),
    ("Šilutė", "LTU"),
    ("Širvintos", "LTU"),
    ("Švenčionys", "LTU"),
    // Luxembourg
    ("Capellen", "LUX"),
    ("Clerf", "LUX"),
    ("Diekirch", "LUX"),
    ("Echternach", "LUX"),
    ("Esch an der Alzette", "LUX"),
    ("Grevenmacher", "LUX"),
    ("Luxembourg", "LUX"),
    ("Mersch", "LUX"),
    ("Redange", "LUX"),
    ("Remich", "LUX"),
    ("Veianen", "LUX"),
    ("Wiltz", "LUX"),
    // Latvia
    ("Aglonas novads", "LVA"),
    ("Aizkraukles novads", "LVA"),
    ("Aizputes novads", "LVA"),
    ("Aknīstes novads", "LVA"),
    ("Alojas novads", "LVA"),
    ("Alsungas novads", "LVA"),
    ("Alūksnes novads", "LVA"),
    ("Amatas novads", "LVA"),
    ("Apes novads", "LVA"),
    ("Auces novads", "LVA"),
    ("Babītes novads", "LVA"),
    ("Baldones novads", "LVA"),
    ("Baltinavas novads", "LVA"),
    ("Balvu novads", "LVA"),
    ("Bauskas novads", "LVA"),
    ("Beverīnas novads", "LVA"),
    ("Brocēnu novads", "LVA"),
    ("Burtnieku novads", "LVA"),
    ("Carnikavas novads", "LVA"),
    ("Cesvaines novads", "LVA"),
    ("Ciblas novads", "LVA"),
    ("Cēsu novads", "LVA"),
    ("Dagdas novads", "LVA"),
    ("Daugavpils", "LVA"),
    ("Daugavpils novads", "LVA"),
    ("Dobeles novads", "LVA"),
    ("Dundagas novads", "LVA"),
    ("Durbes novads", "LVA"),
    ("Engures novads", "LVA"),
    ("Garkalnes novads", "LVA"),
    ("Grobiņas novads", "LVA"),
    ("Gulbenes novads", "LVA"),
    ("Iecavas novads", "LVA"),
    ("Ikšķiles novads", "LVA"),
    ("Ilūkstes novads", "LVA"),
    ("Inčukalna novads", "LVA"),
    ("Jaunjelgavas novads", "LVA"),
    ("Jaunpiebalgas novads", "LVA"),
    ("Jaunpils novads", "LVA"),
    ("Jelgava", "LVA"),
    ("Jelgavas novads", "LVA"),
    ("Jēkabpils", "LVA"),
    ("Jēkabpils novads", "LVA"),
    ("Jūrmala", "LVA"),
    ("Kandavas novads", "LVA"),
    ("Kocēnu novads", "LVA"),
    ("Kokneses novads", "LVA"),
    ("Krimuldas novads", "LVA"),
    ("Krustpils novads", "LVA"),
    ("Krāslavas novads", "LVA"),
    ("Kuldīgas novads", "LVA"),
    ("Kārsavas novads", "LVA"),
    ("Lielvārdes novads", "LVA"),
    ("Liepāja", "LVA"),
    ("Limbažu novads", "LVA"),
    ("Lubānas novads", "LVA"),
    ("Ludzas novads", "LVA"),
    ("Līgatnes novads", "LVA"),
    ("Līvānu novads", "LVA"),
    ("Madonas novads", "LVA"),
    ("Mazsalacas novads", "LVA"),
    ("Mālpils novads", "LVA"),
    ("Mārupes novads", "LVA"),
    ("Mērsraga novads", "LVA"),
    ("Naukšēnu novads", "LVA"),
    ("Neretas novads", "LVA"),
    ("Nīcas novads", "LVA"),
    ("Ogres novads", "LVA"),
    ("Olaines novads", "LVA"),
    ("Ozolnieku novads", "LVA"),
    ("Preiļu novads", "LVA"),
    ("Priekules novads", "LVA"),
    ("Priekuļu novads", "LVA"),
    ("Pārgaujas novads", "LVA"),
    ("Pāvilostas novads", "LVA"),
    ("Pļaviņu novads", "LVA"),
    ("Raunas novads", "LVA"),
    ("Riebiņu novads", "LVA"),
    ("Rojas novads", "LVA"),
    ("Ropažu novads", "LVA"),
    ("Rucavas novads", "LVA"),
    ("Rugāju novads", "LVA"),
    ("Rundāles novads", "LVA"),
    ("Rēzekne", "LVA"),
    ("Rēzeknes novads", "LVA"),
    ("Rīga", "LVA"),
    ("Rūjienas novads", "LVA"),
    ("Salacgrīvas novads", "LVA"),
    ("Salas novads", "LVA"),
    ("Salaspils novads", "LVA"),
    ("Saldus novads", "LVA"),
    ("Saulkrastu novads", "LVA"),
    ("Siguldas novads", "LVA"),
    ("Skrundas novads", "LVA"),
    ("Skrīveru novads", "LVA"),
    ("Smiltenes novads", "LVA"),
    ("Stopiņu novads", "LVA"),
    ("Strenču novads", "LVA"),
    ("Sējas novads", "LVA"),
    ("Talsu novads", "LVA"),
    ("Tukuma novads", "LVA"),
    ("Tērvetes novads", "LVA"),
    ("Vaiņodes novads", "LVA"),
    ("Valkas novads", "LVA"),
    ("Valmiera", "LVA"),
    ("Varakļānu novads", "LVA"),
    ("Vecpiebalgas novads", "LVA"),
    ("Vecumnieku novads", "LVA"),
    ("Ventspils", "LVA"),
    ("Ventspils novads", "LVA"),
    ("Viesītes novads", "LVA"),
    ("Viļakas novads", "LVA"),
    ("Viļānu novads", "LVA"),
    ("Vārkavas novads", "LVA"),
    ("Zilupes novads", "LVA"),
    ("Ādažu novads", "LVA"),
    ("Ērgļu novads", "LVA"),
    ("Ķeguma novads", "LVA"),
    ("Ķekavas novads", "LVA"),
    // Morocco
    ("Agadir-Ida-Ou-Tanane", "MAR"),
    ("Al Haouz", "MAR"),
    ("Al Hoceïma", "MAR"),
    ("Aousserd (EH)", "MAR"),
    ("Assa-Zag (EH-partial)", "MAR"),
    ("Azilal", "MAR"),
    ("Benslimane", "MAR"),
    ("Berkane", "MAR"),
    ("Berrechid", "MAR"),
    ("Boujdour (EH)", "MAR"),
    ("Boulemane", "MAR"),
    ("Béni Mellal", "MAR"),
    ("Béni Mellal-Khénifra", "MAR"),
    ("Casablanca", "MAR"),
    ("Casablanca-Settat", "MAR"),
    ("Chefchaouen", "MAR"),
    ("Chichaoua", "MAR"),
    ("Chtouka-Ait Baha", "MAR"),
    ("Dakhla-Oued Ed-Dahab (EH)", "MAR"),
    ("Driouch", "MAR"),
    ("Drâa-Tafilalet", "MAR"),
    ("El Hajeb", "MAR"),
    ("El Jadida", "MAR"),
    ("El Kelâa des Sraghna", "MAR"),
    ("Errachidia", "MAR"),
    ("Es-Semara (EH-partial)", "MAR"),
    ("Essaouira", "MAR"),
    ("Fahs-Anjra", "MAR"),
    ("Figuig", "MAR"),
    ("Fquih Ben Salah", "MAR"),
    ("Fès", "MAR"),
    ("Fès-Meknès", "MAR"),
    ("Guelmim", "MAR"),
    ("Guelmim-Oued Noun (EH-partial)", "MAR"),
    ("Guercif", "MAR"),
    ("Ifrane", "MAR"),
    ("Inezgane-Ait Melloul", "MAR"),
    ("Jerada", "MAR"),
    ("Khouribga", "MAR"),
    ("Khémisset", "MAR"),
    ("Khénifra", "MAR"),
    ("Kénitra", "MAR"),
    ("L'Oriental", "MAR"),
    ("Larache", "MAR"),
    ("Laâyoune (EH)", "MAR"),
    ("Laâyoune-Sakia El Hamra (EH-partial)", "MAR"),
    ("Marrakech", "MAR"),
    ("Marrakech-Safi", "MAR"),
    ("Meknès", "MAR"),
    ("Midelt", "MAR"),
    ("Mohammadia", "MAR"),
    ("Moulay Yacoub", "MAR"),
    ("Médiouna", "MAR"),
    ("M’diq-Fnideq", "MAR"),
    ("Nador", "MAR"),
    ("Nouaceur", "MAR"),
    ("Ouarzazate", "MAR"),
    ("Oued Ed-Dahab (EH)", "MAR"),
    ("Ouezzane", "MAR"),
    ("Oujda-Angad", "MAR"),
    ("Rabat", "MAR"),
    ("Rabat-Salé-Kénitra", "MAR"),
    ("Rehamna", "MAR"),
    ("Safi", "MAR"),
    ("Salé", "MAR"),
    ("Sefrou", "MAR"),
    ("Settat", "MAR"),
    ("Sidi Bennour", "MAR"),
    ("Sidi Ifni", "MAR"),
    ("Sidi Kacem", "MAR"),
    ("Sidi Slimane", "MAR"),
    ("Skhirate-Témara", "MAR"),
    ("Souss-Massa", "MAR"),
    ("Tan-Tan (EH-partial)", "MAR"),
    ("Tanger-Assilah", "MAR"),
    ("Tanger-Tétouan-Al Hoceïma", "MAR"),
    ("Taounate", "MAR"),
    ("Taourirt", "MAR"),
    ("Tarfaya (EH-partial)", "MAR"),
    ("Taroudannt", "MAR"),
    ("Tata", "MAR"),
    ("Taza", "MAR"),
    ("Tinghir", "MAR"),
    ("Tiznit", "MAR"),
    ("Tétouan", "MAR"),
    ("Youssoufia", "MAR"),
    ("Zagora", "MAR"),
    // Monaco
    ("Fontvieille", "MCO"),
    ("Jardin Exotique", "MCO"),
    ("La Colle", "MCO"),
    ("La Condamine", "MCO"),
    ("La Gare", "MCO"),
    ("La Source", "MCO"),
    ("Larvotto", "MCO"),
    ("Malbousquet", "MCO"),
    ("Monaco-Ville", "MCO"),
    ("Moneghetti", "MCO"),
    ("Monte-Carlo", "MCO"),
    ("Moulins", "MCO"),
    ("Port-Hercule", "MCO"),
    ("Saint-Roman", "MCO"),
    ("Sainte-Dévote", "MCO"),
    ("Spélugues", "MCO"),
    ("Vallon de la Rousse", "MCO"),
    // Moldova, Republic of
    ("Anenii Noi", "MDA"),
    ("Basarabeasca", "MDA"),
    ("Bender [Tighina]", "MDA"),
    ("Briceni", "MDA"),
    ("Bălți", "MDA"),
    ("Cahul", "MDA"),
    ("Cantemir", "MDA"),
    ("Chișinău", "MDA"),
    ("Cimișlia", "MDA"),
    ("Criuleni", "MDA"),
    ("Călărași", "MDA"),
    ("Căușeni", "MDA"),
    ("Dondușeni", "MDA"),
    ("Drochia", "MDA"),
    ("Dubăsari", "MDA"),
    ("Edineț", "MDA"),
    ("Florești", "MDA"),
    ("Fălești", "MDA"),
    ("Glodeni", "MDA"),
    ("Hîncești", "MDA"),
    ("Ialoveni", "MDA"),
    ("Leova", "MDA"),
    ("Nisporeni", "MDA"),
    ("Ocnița", "MDA"),
    ("Orhei", "MDA"),
    ("Rezina", "MDA"),
    ("Rîșcani", "MDA"),
    ("Soroca", "MDA"),
    ("Strășeni", "MDA"),
    ("Sîngerei", "MDA"),
    ("Taraclia", "MDA"),
    ("Telenești", "MDA"),
    ("Ungheni", "MDA"),
    ("Șoldănești", "MDA"),
    ("Ștefan Vodă", "MDA"),
    // Madagascar
    ("Antananarivo", "MDG"),
    ("Antsiranana", "MDG"),
    ("Fianarantsoa", "MDG"),
    ("Mahajanga", "MDG"),
    ("Toamasina", "MDG"),
    ("Toliara", "MDG"),
    // Maldives
    ("Addu City", "MDV"),
    ("Faadhippolhu", "MDV"),
    ("Felidhu Atoll", "MDV"),
    ("Fuvammulah", "MDV"),
    ("Hahdhunmathi", "MDV"),
    ("Kolhumadulu", "MDV"),
    ("Male", "MDV"),
    ("Male Atoll", "MDV"),
    ("Mulaku Atoll", "MDV"),
    ("North Ari Atoll", "MDV"),
    ("North Huvadhu Atoll", "MDV"),
    ("North Maalhosmadulu", "MDV"),
    ("North Miladhunmadulu", "MDV"),
    ("North Nilandhe Atoll", "MDV"),
    ("North Thiladhunmathi", "MDV"),
    ("South Ari Atoll", "MDV"),
    ("South Huvadhu Atoll", "MDV"),
    ("South Maalhosmadulu", "MDV"),
    ("South Miladhunmadulu", "MDV"),
    ("South Nilandhe Atoll", "MDV"),
    ("South Thiladhunmathi", "MDV"),
    // Mexico
    ("Aguascalientes", "MEX"),
    ("Baja California", "MEX"),
    ("Baja California Sur", "MEX"),
    ("Campeche", "MEX"),
    ("Chiapas", "MEX"),
    ("Chihuahua", "MEX"),
    ("Ciudad de México", "MEX"),
    ("Coahuila de Zaragoza", "MEX"),
    ("Colima", "MEX"),
    ("Durango", "MEX"),
    ("Guanajuato", "MEX"),
    ("Guerrero", "MEX"),
    ("Hidalgo", "MEX"),
    ("Jalisco", "MEX"),
    ("Michoacán de Ocampo", "MEX"),
    ("Morelos", "MEX"),
    ("México", "MEX"),
    ("Nayarit", "MEX"),
    ("Nuevo León", "MEX"),
    ("Oaxaca", "MEX"),
    ("Puebla", "MEX"),
    ("Querétaro", "MEX"),
    ("Quintana Roo", "MEX"),
    ("San Luis Potosí", "MEX"),
    ("Sinaloa", "MEX"),
    ("Sonora", "MEX"),
    ("Tabasco", "MEX"),
    ("Tamaulipas", "MEX"),
    ("Tlaxcala", "MEX"),
    ("Veracruz de Ignacio de la Llave", "MEX"),
    ("Yucatán", "MEX"),
    ("Zacatecas", "MEX"),
    // Marshall Islands
    ("Ailinglaplap", "MHL"),
    ("Ailuk", "MHL"),
    ("Arno", "MHL"),
    ("Aur", "MHL"),
    ("Bikini & Kili", "MHL"),
    ("Ebon", "MHL"),
    ("Enewetak & Ujelang", "MHL"),
    ("Jabat", "MHL"),
    ("Jaluit", "MHL"),
    ("Kwajalein", "MHL"),
    ("Lae", "MHL"),
    ("Lib", "MHL"),
    ("Likiep", "MHL"),
    ("Majuro", "MHL"),
    ("Maloelap", "MHL"),
    ("Mejit", "MHL"),
    ("Mili", "MHL"),
    ("Namdrik", "MHL"),
    ("Namu", "MHL"),
    ("Ralik chain", "MHL"),
    ("Ratak chain", "MHL"),
    ("Rongelap", "MHL"),
    ("Ujae", "MHL"),
    ("Utrik", "MHL"),
    ("Wotho", "MHL"),
    ("Wotje", "MHL"),
    // North Macedonia
    ("Aerodrom †", "MKD"),
    ("Aračinovo", "MKD"),
    ("Berovo", "MKD"),
    ("Bitola", "MKD"),
    ("Bogdanci", "MKD"),
    ("Bogovinje", "MKD"),
    ("Bosilovo", "MKD"),
    ("Brvenica", "MKD"),
    ("Butel †", "MKD"),
    ("Centar Župa", "MKD"),
    ("Centar †", "MKD"),
    ("Debar", "MKD"),
    ("Debrca", "MKD"),
    ("Delčevo", "MKD"),
    ("Demir Hisar", "MKD"),
    ("Demir Kapija", "MKD"),
    ("Dojran", "MKD"),
    ("Dolneni", "MKD"),
    ("Gazi Baba †", "MKD"),
    ("Gevgelija", "MKD"),
    ("Gjorče Petrov †", "MKD"),
    ("Gostivar", "MKD"),
    ("Gradsko", "MKD"),
    ("Ilinden", "MKD"),
    ("Jegunovce", "MKD"),
    ("Karbinci", "MKD"),
    ("Karpoš †", "MKD"),
    ("Kavadarci", "MKD"),
    ("Kisela Voda †", "MKD"),
    ("Kičevo", "MKD"),
    ("Konče", "MKD"),
    ("Kočani", "MKD"),
    ("Kratovo", "MKD"),
    ("Kriva Palanka", "MKD"),
    ("Krivogaštani", "MKD"),
    ("Kruševo", "MKD"),
    ("Kumanovo", "MKD"),
    ("Lipkovo", "MKD"),
    ("Lozovo", "MKD"),
    ("Makedonska Kamenica", "MKD"),
    ("Makedonski Brod", "MKD"),
    ("Mavrovo i Rostuše", "MKD"),
    ("Mogila", "MKD"),
    ("Negotino", "MKD"),
    ("Novaci", "MKD"),
    ("Novo Selo", "MKD"),
    ("Ohrid", "MKD"),
    ("Pehčevo", "MKD"),
    ("Petrovec", "MKD"),
    ("Plasnica", "MKD"),
    ("Prilep", "MKD"),
    ("Probištip", "MKD"),
    ("Radoviš", "MKD"),
    ("Rankovce", "MKD"),
    ("Resen", "MKD"),
    ("Rosoman", "MKD"),
    ("Saraj †", "MKD"),
    ("Sopište", "MKD"),
    ("Staro Nagoričane", "MKD"),
    ("Struga", "MKD"),
    ("Strumica", "MKD"),
    ("Studeničani", "MKD"),
    ("Sveti Nikole", "MKD"),
    ("Tearce", "MKD"),
    ("Tetovo", "MKD"),
    ("Valandovo", "MKD"),
    ("Vasilevo", "MKD"),
    ("Veles", "MKD"),
    ("Vevčani", "MKD"),
    ("Vinica", "MKD"),
    ("Vrapčište", "MKD"),
    ("Zelenikovo", "MKD"),
    ("Zrnovci", "MKD"),
    ("Čair †", "MKD"),
    ("Čaška", "MKD"),
    ("Češinovo-Obleševo", "MKD"),
    ("Čučer-Sandevo", "MKD"),
    ("Štip", "MKD"),
    ("Šuto Orizari †", "MKD"),
    ("Želino", "MKD"),
    // Mali
    ("Bamako", "MLI"),
    ("Gao", "MLI"),
    ("Kayes", "MLI"),
    ("Kidal", "MLI"),
    ("Koulikoro", "MLI"),
    ("Mopti", "MLI"),
    ("Ménaka", "MLI"),
    ("Sikasso", "MLI"),
    ("Ségou", "MLI"),
    ("Taoudénit", "MLI"),
    ("Tombouctou", "MLI"),
    // Malta
    ("Attard", "MLT"),
    ("Balzan", "MLT"),
    ("Birgu", "MLT"),
    ("Birkirkara", "MLT"),
    ("Birżebbuġa", "MLT"),
    ("Bormla", "MLT"),
    ("Dingli", "MLT"),
    ("Fgura", "MLT"),
    ("Floriana", "MLT"),
    ("Fontana", "MLT"),
    ("Gudja", "MLT"),
    ("Għajnsielem", "MLT"),
    ("Għarb", "MLT"),
    ("Għargħur", "MLT"),
    ("Għasri", "MLT"),
    ("Għaxaq", "MLT"),
    ("Gżira", "MLT"),
    ("Iklin", "MLT"),
    ("Isla", "MLT"),
    ("Kalkara", "MLT"),
    ("Kerċem", "MLT"),
    ("Kirkop", "MLT"),
    ("Lija", "MLT"),
    ("Luqa", "MLT"),
    ("Marsa", "MLT"),
    ("Marsaskala", "MLT"),
    ("Marsaxlokk", "MLT"),
    ("Mdina", "MLT"),
    ("Mellieħa", "MLT"),
    ("Mosta", "MLT"),
    ("Mqabba", "MLT"),
    ("Msida", "MLT"),
    ("Mtarfa", "MLT"),
    ("Munxar", "MLT"),
    ("Mġarr", "MLT"),
    ("Nadur", "MLT"),
    ("Naxxar", "MLT"),
    ("Paola", "MLT"),
    ("Pembroke", "MLT"),
    ("Pietà", "MLT"),
    ("Qala", "MLT"),
    ("Qormi", "MLT"),
    ("Qrendi", "MLT"),
    ("Rabat Gozo", "MLT"),
    ("Rabat Malta", "MLT"),
    ("Safi", "MLT"),
    ("Saint John", "MLT"),
    ("Saint Julian's", "MLT"),
    ("Saint Lawrence", "MLT"),
    ("Saint Lucia's", "MLT"),
    ("Saint Paul's Bay", "MLT"),
    ("Sannat", "MLT"),
    ("Santa Venera", "MLT"),
    ("Siġġiewi", "MLT"),
    ("Sliema", "MLT"),
    ("Swieqi", "MLT"),
    ("Ta' Xbiex", "MLT"),
    ("Tarxien", "MLT"),
    ("Valletta", "MLT"),
    ("Xagħra", "MLT"),
    ("Xewkija", "MLT"),
    ("Xgħajra", "MLT"),
    ("Ħamrun", "MLT"),
    ("Żabbar", "MLT"),
    ("Żebbuġ Gozo", "MLT"),
    ("Żebbuġ Malta", "MLT"),
    ("Żejtun", "MLT"),
    ("Żurrieq", "MLT"),
    // Myanmar
    ("Ayeyarwady", "MMR"),
    ("Bago", "MMR"),
    ("Chin", "MMR"),
    ("Kachin", "MMR"),
    ("Kayah", "MMR"),
    ("Kayin", "MMR"),
    ("Magway", "MMR"),
    ("Mandalay", "MMR"),
    ("Mon", "MMR"),
    ("Nay Pyi Taw", "MMR"),
    ("Rakhine", "MMR"),
    ("Sagaing", "MMR"),
    ("Shan", "MMR"),
    ("Tanintharyi", "MMR"),
    ("Yangon", "MMR"),
    // Montenegro
    ("Andrijevica", "MNE"),
    ("Bar", "MNE"),
    ("Berane", "MNE"),
    ("Bijelo Polje", "MNE"),
    ("Budva", "MNE"),
    ("Cetinje", "MNE"),
    ("Danilovgrad", "MNE"),
    ("Gusinje", "MNE"),
    ("Herceg-Novi", "MNE"),
    ("Kolašin", "MNE"),
    ("Kotor", "MNE"),
    ("Mojkovac", "MNE"),
    ("Nikšić", "MNE"),
    ("Petnjica", "MNE"),
    ("Plav", "MNE"),
    ("Pljevlja", "MNE"),
    ("Plužine", "MNE"),
    ("Podgorica", "MNE"),
    ("Rožaje", "MNE"),
    ("Tivat", "MNE"),
    ("Tuzi", "MNE"),
    ("Ulcinj", "MNE"),
    ("Šavnik", "MNE"),
    ("Žabljak", "MNE"),
    // Mongolia
    ("Arhangay", "MNG"),
    ("Bayan-Ölgiy", "MNG"),
    ("Bayanhongor", "MNG"),
    ("Bulgan", "MNG"),
    ("Darhan uul", "MNG"),
    ("Dornod", "MNG"),
    ("Dornogovĭ", "MNG"),
    ("Dundgovĭ", "MNG"),
    ("Dzavhan", "MNG"),
    ("Govĭ-Altay", "MNG"),
    ("Govĭ-Sümber", "MNG"),
    ("Hentiy", "MNG"),
    ("Hovd", "MNG"),
    ("Hövsgöl", "MNG"),
    ("Orhon", "MNG"),
    ("Selenge", "MNG"),
    ("Sühbaatar", "MNG"),
    ("Töv", "MNG"),
    ("Ulaanbaatar", "MNG"),
    ("Uvs", "MNG"),
    ("Ömnögovĭ", "MNG"),
    ("Övörhangay", "MNG"),
    // Mozambique
    ("Cabo Delgado", "MOZ"),
    ("Gaza", "MOZ"),
    ("Inhambane", "MOZ"),
    ("Manica", "MOZ"),
    ("Maputo", "MOZ"),
    ("Nampula", "MOZ"),
    ("Niassa", "MOZ"),
    ("Sofala", "MOZ"),
    ("Tete", "MOZ"),
    ("Zambézia", "MOZ"),
    // Mauritania
    ("Adrar", "MRT"),
    ("Assaba", "MRT"),
    ("Brakna", "MRT"),
    ("Dakhlet Nouâdhibou", "MRT"),
    ("Gorgol", "MRT"),
    ("Guidimaka", "MRT"),
    ("Hodh ech Chargui", "MRT"),
    ("Hodh el Gharbi", "MRT"),
    ("Inchiri", "MRT"),
    ("Nouakchott Nord", "MRT"),
    ("Nouakchott Ouest", "MRT"),
    ("Nouakchott Sud", "MRT"),
    ("Tagant", "MRT"),
    ("Tiris Zemmour", "MRT"),
    ("Trarza", "MRT"),
    // Mauritius
    ("Agalega Islands", "MUS"),
    ("Black River", "MUS"),
    ("Cargados Carajos Shoals", "MUS"),
    ("Flacq", "MUS"),
    ("Grand Port", "MUS"),
    ("Moka", "MUS"),
    ("Pamplemousses", "MUS"),
    ("Plaines Wilhems", "MUS"),
    ("Port Louis", "MUS"),
    ("Rivière du Rempart", "MUS"),
    ("Rodrigues Island", "MUS"),
    ("Savanne", "MUS"),
    // Malawi
    ("Balaka", "MWI"),
    ("Blantyre", "MWI"),
    ("Central Region", "MWI"),
    ("Chikwawa", "MWI"),
    ("Chiradzulu", "MWI"),
    ("Chitipa", "MWI"),
    ("Dedza", "MWI"),
    ("Dowa", "MWI"),
    ("Karonga", "MWI"),
    ("Kasungu", "MWI"),
    ("Likoma", "MWI"),
    ("Lilongwe", "MWI"),
    ("Machinga", "MWI"),
    ("Mangochi", "MWI"),
    ("Mchinji", "MWI"),
    ("Mulanje", "MWI"),
    ("Mwanza", "MWI"),
    ("Mzimba", "MWI"),
    ("Neno", "MWI"),
    ("Nkhata Bay", "MWI"),
    ("Nkhotakota", "MWI"),
    ("Northern Region", "MWI"),
    ("Nsanje", "MWI"),
    ("Ntcheu", "MWI"),
    ("Ntchisi", "MWI"),
    ("Phalombe", "MWI"),
    ("Rumphi", "MWI"),
    ("Salima", "MWI"),
    ("Southern Region", "MWI"),
    ("Thyolo", "MWI"),
    ("Zomba", "MWI"),
    // Malaysia
    ("Johor", "MYS"),
    ("Kedah", "MYS"),
    ("Kelantan", "MYS"),
    ("Melaka", "MYS"),
    ("Negeri Sembilan", "MYS"),
    ("Pahang", "MYS"),
    ("Perak", "MYS"),
    ("Perlis", "MYS"),
    ("Pulau Pinang", "MYS"),
    ("Sabah", "MYS"),
    ("Sarawak", "MYS"),
    ("Selangor", "MYS"),
    ("Terengganu", "MYS"),
    ("Wilayah Persekutuan Kuala Lumpur", "MYS"),
    ("Wilayah Persekutuan Labuan", "MYS"),
    ("Wilayah Persekutuan Putrajaya", "MYS"),
    // Namibia
    ("//Karas", "NAM"),
    ("Erongo", "NAM"),
    ("Hardap", "NAM"),
    ("Kavango East", "NAM"),
    ("Kavango West", "NAM"),
    ("Khomas", "NAM"),
    ("Kunene", "NAM"),
    ("Ohangwena", "NAM"),
    ("Omaheke", "NAM"),
    ("Omusati", "NAM"),
    ("Oshana", "NAM"),
    ("Oshikoto", "NAM"),
    ("Otjozondjupa", "NAM"),
    ("Zambezi", "NAM"),
    // Niger
    ("Agadez", "NER"),
    ("Diffa", "NER"),
    ("Dosso", "NER"),
    ("Maradi", "NER"),
    ("Niamey", "NER"),
    ("Tahoua", "NER"),
    ("Tillabéri", "NER"),
    ("Zinder", "NER"),
    // Nigeria
    ("Abia", "NGA"),
    ("Abuja Federal Capital Territory", "NGA"),
    ("Adamawa", "NGA"),
    ("Akwa Ibom", "NGA"),
    ("Anambra", "NGA"),
    ("Bauchi", "NGA"),
    ("Bayelsa", "NGA"),
    ("Benue", "NGA"),
    ("Borno", "NGA"),
    ("Cross River", "NGA"),
    ("Delta", "NGA"),
    ("Ebonyi", "NGA"),
    ("Edo", "NGA"),
    ("Ekiti", "NGA"),
    ("Enugu", "NGA"),
    ("Gombe", "NGA"),
    ("Imo", "NGA"),
    ("Jigawa", "NGA"),
    ("Kaduna", "NGA"),
    ("Kano", "NGA"),
    ("Katsina", "NGA"),
    ("Kebbi", "NGA"),
    ("Kogi", "NGA"),
    ("Kwara", "NGA"),
    ("Lagos", "NGA"),
    ("Nasarawa", "NGA"),
    ("Niger", "NGA"),
    ("Ogun", "NGA"),
    ("Ondo", "NGA"),
    ("Osun", "NGA"),
    ("Oyo", "NGA"),
    ("Plateau", "NGA"),
    ("Rivers", "NGA"),
    ("Sokoto", "NGA"),
    ("Taraba", "NGA"),
    ("Yobe", "NGA"),
    ("Zamfara", "NGA"),
    // Nicaragua
    ("Boaco", "NIC"),
    ("Carazo", "NIC"),
    ("Chinandega", "NIC"),
    ("Chontales", "NIC"),
    ("Costa Caribe Norte", "NIC"),
    ("Costa Caribe Sur", "NIC"),
    ("Estelí", "NIC"),
    ("Granada", "NIC"),
    ("Jinotega", "NIC"),
    ("León", "NIC"),
    ("Madriz", "NIC"),
    ("Managua", "NIC"),
    ("Masaya", "NIC"),
    ("Matagalpa", "NIC"),
    ("Nueva Segovia", "NIC"),
    ("Rivas", "NIC"),
    ("Río San Juan", "NIC"),
    // Netherlands
    ("Aruba", "NLD"),
    ("Bonaire", "NLD"),
    ("Curaçao", "NLD"),
    ("Drenthe", "NLD"),
    ("Flevoland", "NLD"),
    ("Fryslân", "NLD"),
    ("Gelderland", "NLD"),
    ("Groningen", "NLD"),
    ("Limburg", "NLD"),
    ("Noord-Brabant", "NLD"),
    ("Noord-Holland", "NLD"),
    ("Overijssel", "NLD"),
    ("Saba", "NLD"),
    ("Sint Eustatius", "NLD"),
    ("Sint Maarten", "NLD"),
    ("Utrecht", "NLD"),
    ("Zeeland", "NLD"),
    ("Zuid-Holland", "NLD"),
    // Norway
    ("Agder", "NOR"),
    ("Innlandet", "NOR"),
    ("Jan Mayen (Arctic Region)", "NOR"),
    ("Møre og Romsdal", "NOR"),
    ("Nordland", "NOR"),
    ("Oslo", "NOR"),
    ("Rogaland", "NOR"),
    ("Romssa ja Finnmárkku", "NOR"),
    ("Svalbard (Arctic Region)", "NOR"),
    ("Trööndelage", "NOR"),
    ("Vestfold og Telemark", "NOR"),
    ("Vestland", "NOR"),
    ("Viken", "NOR"),
    // Nepal
    ("Bagmati", "NPL"),
    ("Bheri", "NPL"),
    ("Bāgmatī", "NPL"),
    ("Central", "NPL"),
    ("Dhawalagiri", "NPL"),
    ("Eastern", "NPL"),
    ("Far Western", "NPL"),
    ("Gandaki", "NPL"),
    ("Janakpur", "NPL"),
    ("Karnali", "NPL"),
    ("Kosi", "NPL"),
    ("Lumbini", "NPL"),
    ("Mahakali", "NPL"),
    ("Mechi", "NPL"),
    ("Mid Western", "NPL"),
    ("Narayani", "NPL"),
    ("Province 1", "NPL"),
    ("Province 2", "NPL"),
    ("Province 5", "NPL"),
    ("Rapti", "NPL"),
    ("Sagarmatha", "NPL"),
    ("Seti", "NPL"),
    ("Sudūr Pashchim", "NPL"),
    ("Western", "NPL"),
    // Nauru
    ("Aiwo", "NRU"),
    ("Anabar", "NRU"),
    ("Anetan", "NRU"),
    ("Anibare", "NRU"),
    ("Baitsi", "NRU"),
    ("Boe", "NRU"),
    ("Buada", "NRU"),
    ("Denigomodu", "NRU"),
    ("Ewa", "NRU"),
    ("Ijuw", "NRU"),
    ("Meneng", "NRU"),
    ("Nibok", "NRU"),
    ("Uaboe", "NRU"),
    ("Yaren", "NRU"),
    // New Zealand
    ("Auckland", "NZL"),
    ("Bay of Plenty", "NZL"),
    ("Canterbury", "NZL"),
    ("Chatham Islands Territory", "NZL"),
    ("Gisborne", "NZL"),
    ("Hawke's Bay", "NZL"),
    ("Manawatu-Wanganui", "NZL"),
    ("Marlborough", "NZL"),
    ("Nelson", "NZL"),
    ("Northland", "NZL"),
    ("Otago", "NZL"),
    ("Southland", "NZL"),
    ("Taranaki", "NZL"),
    ("Tasman", "NZL"),
    ("Waikato", "NZL"),
    ("Wellington", "NZL"),
    ("West Coast", "NZL"),
    // Oman
    ("Ad Dākhilīyah", "OMN"),
    ("Al Buraymī", "OMN"),
    ("Al Wusţá", "OMN"),
    ("Az̧ Z̧āhirah", "OMN"),
    ("Janūb al Bāţinah", "OMN"),
    ("Janūb ash Sharqīyah", "OMN"),
    ("Masqaţ", "OMN"),
    ("Musandam", "OMN"),
    ("Shamāl al Bāţinah", "OMN"),
    ("Shamāl ash Sharqīyah", "OMN"),
    ("Z̧ufār", "OMN"),
    // Pakistan
    ("Azad Jammu and Kashmir", "PAK"),
    ("Balochistan", "PAK"),
    ("Gilgit-Baltistan", "PAK"),
    ("Islamabad", "PAK"),
    ("Khyber Pakhtunkhwa", "PAK"),
    ("Punjab", "PAK"),
    ("Sindh", "PAK"),
    // Panama
    ("Bocas del Toro", "PAN"),
    ("Chiriquí", "PAN"),
    ("Coclé", "PAN"),
    ("Colón", "PAN"),
    ("Darién", "PAN"),
    ("Emberá", "PAN"),
    ("Guna Yala", "PAN"),
    ("Herrera", "PAN"),
    ("Los Santos", "PAN"),
    ("Ngöbe-Buglé", "PAN"),
    ("Panamá", "PAN"),
    ("Panamá Oeste", "PAN"),
    ("Veraguas", "PAN"),
    // Peru
    ("Amarumayu", "PER"),
    ("Ancash", "PER"),
    ("Apurimaq", "PER"),
    ("Arequipa", "PER"),
    ("Ayacucho", "PER"),
    ("Cajamarca", "PER"),
    ("Cusco", "PER"),
    ("El Callao", "PER"),
    ("Huancavelica", "PER"),
    ("Hunin", "PER"),
    ("Huánuco", "PER"),
    ("Ica", "PER"),
    ("La Libertad", "PER"),
    ("Lambayeque", "PER"),
    ("Lima", "PER"),
    ("Lima hatun llaqta", "PER"),
    ("Loreto", "PER"),
    ("Madre de Dios", "PER"),
    ("Moquegua", "PER"),
    ("Pasco", "PER"),
    ("Piura", "PER"),
    ("Puno", "PER"),
    ("San Martin", "PER"),
    ("Tacna", "PER"),
    ("Tumbes", "PER"),
    ("Ucayali", "PER"),
    // Philippines
    ("Abra", "PHL"),
    ("Agusan del Norte", "PHL"),
    ("Agusan del Sur", "PHL"),
    ("Aklan", "PHL"),
    ("Albay", "PHL"),
    ("Antique", "PHL"),
    ("Apayao", "PHL"),
    ("Aurora", "PHL"),
    ("Autonomous Region in Muslim Mindanao (ARMM)", "PHL"),
    ("Basilan", "PHL"),
    ("Bataan", "PHL"),
    ("Batanes", "PHL"),
    ("Batangas", "PHL"),
    ("Benguet", "PHL"),
    ("Bicol (Region V)", "PHL"),
    ("Biliran", "PHL"),
    ("Bohol", "PHL"),
    ("Bukidnon", "PHL"),
    ("Bulacan", "PHL"),
    ("Cagayan", "PHL"),
    ("Cagayan Valley (Region II)", "PHL"),
    ("Calabarzon (Region IV-A)", "PHL"),
    ("Camarines Norte", "PHL"),
    ("Camarines Sur", "PHL"),
    ("Camiguin", "PHL"),
    ("Capiz", "PHL"),
    ("Caraga (Region XIII)", "PHL"),
    ("Catanduanes", "PHL"),
    ("Cavite", "PHL"),
    ("Cebu", "PHL"),
    ("Central Luzon (Region III)", "PHL"),
    ("Central Visayas (Region VII)", "PHL"),
    ("Cordillera Administrative Region (CAR)", "PHL"),
    ("Cotabato", "PHL"),
    ("Davao (Region XI)", "PHL"),
    ("Davao Occidental", "PHL"),
    ("Davao Oriental", "PHL"),
    ("Davao de Oro", "PHL"),
    ("Davao del Norte", "PHL"),
    ("Davao del Sur", "PHL"),
    ("Dinagat Islands", "PHL"),
    ("Eastern Samar", "PHL"),
    ("Eastern Visayas (Region VIII)", "PHL"),
    ("Guimaras", "PHL"),
    ("Ifugao", "PHL"),
    ("Ilocos (Region I)", "PHL"),
    ("Ilocos Norte", "PHL"),
    ("Ilocos Sur", "PHL"),
    ("Iloilo", "PHL"),
    ("Isabela", "PHL"),
    ("Kalinga", "PHL"),
    ("La Union", "PHL"),
    ("Laguna", "PHL"),
    ("Lanao del Norte", "PHL"),
    ("Lanao del Sur", "PHL"),
    ("Leyte", "PHL"),
    ("Maguindanao", "PHL"),
    ("Marinduque", "PHL"),
    ("Masbate", "PHL"),
    ("Mimaropa (Region IV-B)", "PHL"),
    ("Mindoro Occidental", "PHL"),
    ("Mindoro Oriental", "PHL"),
    ("Misamis Occidental", "PHL"),
    ("Misamis Oriental", "PHL"),
    ("Mountain Province", "PHL"),
    ("National Capital Region", "PHL"),
    ("Negros Occidental", "PHL"),
    ("Negros Oriental", "PHL"),
    ("Northern Mindanao (Region X)", "PHL"),
    ("Northern Samar", "PHL"),
    ("Nueva Ecija", "PHL"),
    ("Nueva Vizcaya", "PHL"),
    ("Palawan", "PHL"),
    ("Pampanga", "PHL"),
    ("Pangasinan", "PHL"),
    ("Quezon", "PHL"),
    ("Quirino", "PHL"),
    ("Rizal", "PHL"),
    ("Romblon", "PHL"),
    ("Samar", "PHL"),
    ("Sarangani", "PHL"),
    ("Siquijor", "PHL"),
    ("Soccsksargen (Region XII)", "PHL"),
    ("Sorsogon", "PHL"),
    ("South Cotabato", "PHL"),
    ("Southern Leyte", "PHL"),
    ("Sultan Kudarat", "PHL"),
    ("Sulu", "PHL"),
    ("Surigao del Norte", "PHL"),
    ("Surigao del Sur", "PHL"),
    ("Tarlac", "PHL"),
    ("Tawi-Tawi", "PHL"),
    ("Western Visayas (Region VI)", "PHL"),
    ("Zambales", "PHL"),
    ("Zamboanga Peninsula (Region IX)", "PHL"),
    ("Zamboanga Sibugay", "PHL"),
    ("Zamboanga del Norte", "PHL"),
    ("Zamboanga del Sur", "PHL"),
    // Palau
    ("Aimeliik", "PLW"),
    ("Airai", "PLW"),
    ("Angaur", "PLW"),
    ("Hatohobei", "PLW"),
    ("Kayangel", "PLW"),
    ("Koror", "PLW"),
    ("Melekeok", "PLW"),
    ("Ngaraard", "PLW"),
    ("Ngarchelong", "PLW"),
    ("Ngardmau", "PLW"),
    ("Ngatpang", "PLW"),
    ("Ngchesar", "PLW"),
    ("Ngeremlengui", "PLW"),
    ("Ngiwal", "PLW"),
    ("Peleliu", "PLW"),
    ("Sonsorol", "PLW"),
    // Papua New Guinea
    ("Bougainville", "PNG"),
    ("Central", "PNG"),
    ("Chimbu", "PNG"),
    ("East New Britain", "PNG"),
    ("East Sepik", "PNG"),
    ("Eastern Highlands", "PNG"),
    ("Enga", "PNG"),
    ("Gulf", "PNG"),
    ("Hela", "PNG"),
    ("Jiwaka", "PNG"),
    ("Madang", "PNG"),
    ("Manus", "PNG"),
    ("Milne Bay", "PNG"),
    ("Morobe", "PNG"),
    ("National Capital District (Port Moresby)", "PNG"),
    ("New Ireland", "PNG"),
    ("Northern", "PNG"),
    ("Southern Highlands", "PNG"),
    ("West New Britain", "PNG"),
    ("West Sepik", "PNG"),
    ("Western", "PNG"),
    ("Western Highlands", "PNG"),
    // Poland
    ("Dolnośląskie", "POL"),
    ("Kujawsko-pomorskie", "POL"),
    ("Lubelskie", "POL"),
    ("Lubuskie", "POL"),
    ("Mazowieckie", "POL"),
    ("Małopolskie", "POL"),
    ("Opolskie", "POL"),
    ("Podkarpackie", "POL"),
    ("Podlaskie", "POL"),
    ("Pomorskie", "POL"),
    ("Warmińsko-mazurskie", "POL"),
    ("Wielkopolskie", "POL"),
    ("Zachodniopomorskie", "POL"),
    ("Łódzkie", "POL"),
    ("Śląskie", "POL"),
    ("Świętokrzyskie", "POL"),
    // Korea, Democratic People's Republic of
    ("Chagang-do", "PRK"),
    ("Hamgyǒng-bukto", "PRK"),
    ("Hamgyǒng-namdo", "PRK"),
    ("Hwanghae-bukto", "PRK"),
    ("Hwanghae-namdo", "PRK"),
    ("Kangweonto", "PRK"),
    ("Nampho", "PRK"),
    ("P'yǒngan-bukto", "PRK"),
    ("P'yǒngan-namdo", "PRK"),
    ("P'yǒngyang", "PRK"),
    ("Raseon", "PRK"),
    ("Ryanggang-do", "PRK"),
    // Portugal
    ("Aveiro", "PRT"),
    ("Beja", "PRT"),
    ("Braga", "PRT"),
    ("Bragança", "PRT"),
    ("Castelo Branco", "PRT"),
    ("Coimbra", "PRT"),
    ("Faro", "PRT"),
    ("Guarda", "PRT"),
    ("Leiria", "PRT"),
    ("Lisboa", "PRT"),
    ("Portalegre", "PRT"),
    ("Porto", "PRT"),
    ("Região Autónoma da Madeira", "PRT"),
    ("Região Autónoma dos Açores", "PRT"),
    ("Santarém", "PRT"),
    ("Setúbal", "PRT"),
    ("Viana do Castelo", "PRT"),
    ("Vila Real", "PRT"),
    ("Viseu", "PRT"),
    ("Évora", "PRT"),
    // Paraguay
    ("Alto Paraguay", "PRY"),
    ("Alto Paraná", "PRY"),
    ("Amambay", "PRY"),
    ("Asunción", "PRY"),
    ("Boquerón", "PRY"),
    ("Caaguazú", "PRY"),
    ("Caazapá", "PRY"),
    ("Canindeyú", "PRY"),
    ("Central", "PRY"),
    ("Concepción", "PRY"),
    ("Cordillera", "PRY"),
    ("Guairá", "PRY"),
    ("Itapúa", "PRY"),
    ("Misiones", "PRY"),
    ("Paraguarí", "PRY"),
    ("Presidente Hayes", "PRY"),
    ("San Pedro", "PRY"),
    ("Ñeembucú", "PRY"),
    // Palestine, State of
    ("Bethlehem", "PSE"),
    ("Deir El Balah", "PSE"),
    ("Gaza", "PSE"),
    ("Hebron", "PSE"),
    ("Jenin", "PSE"),
    ("Jericho and Al Aghwar", "PSE"),
    ("Jerusalem", "PSE"),
    ("Khan Yunis", "PSE"),
    ("Nablus", "PSE"),
    ("North Gaza", "PSE"),
    ("Qalqilya", "PSE"),
    ("Rafah", "PSE"),
    ("Ramallah", "PSE"),
    ("Salfit", "PSE"),
    ("Tubas", "PSE"),
    ("Tulkarm", "PSE"),
    // Qatar
    ("Ad Dawḩah", "QAT"),
    ("Al Khawr wa adh Dhakhīrah", "QAT"),
    ("Al Wakrah", "QAT"),
    ("Ar Rayyān", "QAT"),
    ("Ash Shamāl", "QAT"),
    ("Ash Shīḩānīyah", "QAT"),
    ("Az̧ Z̧a‘āyin", "QAT"),
    ("Umm Şalāl", "QAT"),
    // Romania
    ("Alba", "ROU"),
    ("Arad", "ROU"),
    ("Argeș", "ROU"),
    ("Bacău", "ROU"),
    ("Bihor", "ROU"),
    ("Bistrița-Năsăud", "ROU"),
    ("Botoșani", "ROU"),
    ("Brașov", "ROU"),
    ("Brăila", "ROU"),
    ("București", "ROU"),
    ("Buzău", "ROU"),
    ("Caraș-Severin", "ROU"),
    ("Cluj", "ROU"),
    ("Constanța", "ROU"),
    ("Covasna", "ROU"),
    ("Călărași", "ROU"),
    ("Dolj", "ROU"),
    ("Dâmbovița", "ROU"),
    ("Galați", "ROU"),
    ("Giurgiu", "ROU"),
    ("Gorj", "ROU"),
    ("Harghita", "ROU"),
    ("Hunedoara", "ROU"),
    ("Ialomița", "ROU"),
    ("Iași", "ROU"),
    ("Ilfov", "ROU"),
    ("Maramureș", "ROU"),
    ("Mehedinți", "ROU"),
    ("Mureș", "ROU"),
    ("Neamț", "ROU"),
    ("Olt", "ROU"),
    ("Prahova", "ROU"),
    ("Satu Mare", "ROU"),
    ("Sibiu", "ROU"),
    ("Suceava", "ROU"),
    ("Sălaj", "ROU"),
    ("Teleorman", "ROU"),
    ("Timiș", "ROU"),
    ("Tulcea", "ROU"),
    ("Vaslui", "ROU"),
    ("Vrancea", "ROU"),
    ("Vâlcea", "ROU"),
    // Russian Federation
    ("Altajskij kraj", "RUS"),
    ("Amurskaja oblast'", "RUS"),
    ("Arhangel'skaja oblast'", "RUS"),
    ("Astrahanskaja oblast'", "RUS"),
    ("Belgorodskaja oblast'", "RUS"),
    ("Brjanskaja oblast'", "RUS"),
    ("Chechenskaya Respublika", "RUS"),
    ("Chelyabinskaya oblast'", "RUS"),
    ("Chukotskiy avtonomnyy okrug", "RUS"),
    ("Chuvashskaya Respublika", "RUS"),
    ("Evrejskaja avtonomnaja oblast'", "RUS"),
    ("Habarovskij kraj", "RUS"),
    ("Hanty-Mansijskij avtonomnyj okrug", "RUS"),
    ("Irkutskaja oblast'", "RUS"),
    ("Ivanovskaja oblast'", "RUS"),
    ("Jamalo-Neneckij avtonomnyj okrug", "RUS"),
    ("Jaroslavskaja oblast'", "RUS"),
    ("Kabardino-Balkarskaja Respublika", "RUS"),
    ("Kaliningradskaja oblast'", "RUS"),
    ("Kaluzhskaya oblast'", "RUS"),
    ("Kamchatskiy kray", "RUS"),
    ("Karachayevo-Cherkesskaya Respublika", "RUS"),
    ("Kemerovskaja oblast'", "RUS"),
    ("Kirovskaja oblast'", "RUS"),
    ("Kostromskaja oblast'", "RUS"),
    ("Krasnodarskij kraj", "RUS"),
    ("Krasnojarskij kraj", "RUS"),
    ("Kurganskaja oblast'", "RUS"),
    ("Kurskaja oblast'", "RUS"),
    ("Leningradskaja oblast'", "RUS"),
    ("Lipeckaja oblast'", "RUS"),
    ("Magadanskaja oblast'", "RUS"),
    ("Moskovskaja oblast'", "RUS"),
    ("Moskva", "RUS"),
    ("Murmanskaja oblast'", "RUS"),
    ("Neneckij avtonomnyj okrug", "RUS"),
    ("Nizhegorodskaya oblast'", "RUS"),
    ("Novgorodskaja oblast'", "RUS"),
    ("Novosibirskaja oblast'", "RUS"),
    ("Omskaja oblast'", "RUS"),
    ("Orenburgskaja oblast'", "RUS"),
    ("Orlovskaja oblast'", "RUS"),
    ("Penzenskaja oblast'", "RUS"),
    ("Permskij kraj", "RUS"),
    ("Primorskij kraj", "RUS"),
    ("Pskovskaja oblast'", "RUS"),
    ("Rjazanskaja oblast'", "RUS"),
    ("Rostovskaja oblast'", "RUS"),
    ("Sahalinskaja oblast'", "RUS"),
    ("Samarskaja oblast'", "RUS"),
    ("Sankt-Peterburg", "RUS"),
    ("Saratovskaja oblast'", "RUS"),
    ("Smolenskaja oblast'", "RUS"),
    ("Stavropol'skij kraj", "RUS"),
    ("Sverdlovskaja oblast'", "RUS"),
    ("Tambovskaja oblast'", "RUS"),
    ("Tjumenskaja oblast'", "RUS"),
    ("Tomskaja oblast'", "RUS"),
    ("Tul'skaja oblast'", "RUS"),
    ("Tverskaja oblast'", "RUS"),
    ("Udmurtskaja Respublika", "RUS"),
    ("Ul'janovskaja oblast'", "RUS"),
    ("Vladimirskaja oblast'", "RUS"),
    ("Volgogradskaja oblast'", "RUS"),
    ("Vologodskaja oblast'", "RUS"),
    ("Voronezhskaya oblast'", "RUS"),
    ("Zabajkal'skij kraj", "RUS"),
    // Rwanda
    ("City of Kigali", "RWA"),
    ("Eastern", "RWA"),
    ("Northern", "RWA"),
    ("Southern", "RWA"),
    ("Western", "RWA"),
    // Saudi Arabia
    ("'Asīr", "SAU"),
    ("Al Bāḩah", "SAU"),
    ("Al Jawf", "SAU"),
    ("Al Madīnah al Munawwarah", "SAU"),
    ("Al Qaşīm", "SAU"),
    ("Al Ḩudūd ash Shamālīyah", "SAU"),
    ("Ar Riyāḑ", "SAU"),
    ("Ash Sharqīyah", "SAU"),
    ("Jāzān", "SAU"),
    ("Makkah al Mukarramah", "SAU"),
    ("Najrān", "SAU"),
    ("Tabūk", "SAU"),
    ("Ḩā'il", "SAU"),
    // Sudan
    ("Blue Nile", "SDN"),
    ("Central Darfur", "SDN"),
    ("East Darfur", "SDN"),
    ("Gedaref", "SDN"),
    ("Gezira", "SDN"),
    ("Kassala", "SDN"),
    ("Khartoum", "SDN"),
    ("North Darfur", "SDN"),
    ("North Kordofan", "SDN"),
    ("Northern", "SDN"),
    ("Red Sea", "SDN"),
    ("River Nile", "SDN"),
    ("Sennar", "SDN"),
    ("South Darfur", "SDN"),
    ("South Kordofan", "SDN"),
    ("West Darfur", "SDN"),
    ("West Kordofan", "SDN"),
    ("White Nile", "SDN"),
    // Senegal
    ("Dakar", "SEN"),
    ("Diourbel", "SEN"),
    ("Fatick", "SEN"),
    ("Kaffrine", "SEN"),
    ("Kaolack", "SEN"),
    ("Kolda", "SEN"),
    ("Kédougou", "SEN"),
    ("Louga", "SEN"),
    ("Matam", "SEN"),
    ("Saint-Louis", "SEN"),
    ("Sédhiou", "SEN"),
    ("Tambacounda", "SEN"),
    ("Thiès", "SEN"),
    ("Ziguinchor", "SEN"),
    // Singapore
    ("Central Singapore", "SGP"),
    ("North East", "SGP"),
    ("North West", "SGP"),
    ("South East", "SGP"),
    ("South West", "SGP"),
    // Saint Helena, Ascension and Tristan da Cunha
    ("Ascension", "SHN"),
    ("Saint Helena", "SHN"),
    ("Tristan da Cunha", "SHN"),
    // Solomon Islands
    ("Capital Territory (Honiara)", "SLB"),
    ("Central", "SLB"),
    ("Choiseul", "SLB"),
    ("Guadalcanal", "SLB"),
    ("Isabel", "SLB"),
    ("Makira-Ulawa", "SLB"),
    ("Malaita", "SLB"),
    ("Rennell and Bellona", "SLB"),
    ("Temotu", "SLB"),
    ("Western", "SLB"),
    // Sierra Leone
    ("Eastern", "SLE"),
    ("North Western", "SLE"),
    ("Northern", "SLE"),
    ("Southern", "SLE"),
    ("Western Area (Freetown)", "SLE"),
    // El Salvador
    ("Ahuachapán", "SLV"),
    ("Cabañas", "SLV"),
    ("Chalatenango", "SLV"),
    ("Cuscatlán", "SLV"),
    ("La Libertad", "SLV"),
    ("La Paz", "SLV"),
    ("La Unión", "SLV"),
    ("Morazán", "SLV"),
    ("San Miguel", "SLV"),
    ("San Salvador", "SLV"),
    ("San Vicente", "SLV"),
    ("Santa Ana", "SLV"),
    ("Sonsonate", "SLV"),
    ("Usulután", "SLV"),
    // San Marino
    ("Acquaviva", "SMR"),
    ("Borgo Maggiore", "SMR"),
    ("Chiesanuova", "SMR"),
    ("Città di San Marino", "SMR"),
    ("Domagnano", "SMR"),
    ("Faetano", "SMR"),
    ("Fiorentino", "SMR"),
    ("Montegiardino", "SMR"),
    ("Serravalle", "SMR"),
    // Somalia
    ("Awdal", "SOM"),
    ("Bakool", "SOM"),
    ("Banaadir", "SOM"),
    ("Bari", "SOM"),
    ("Bay", "SOM"),
    ("Galguduud", "SOM"),
    ("Gedo", "SOM"),
    ("Hiiraan", "SOM"),
    ("Jubbada Dhexe", "SOM"),
    ("Jubbada Hoose", "SOM"),
    ("Mudug", "SOM"),
    ("Nugaal", "SOM"),
    ("Sanaag", "SOM"),
    ("Shabeellaha Dhexe", "SOM"),
    ("Shabeellaha Hoose", "SOM"),
    ("Sool", "SOM"),
    ("Togdheer", "SOM"),
    ("Woqooyi Galbeed", "SOM"),
    // Serbia
    ("Beograd", "SRB"),
    ("Borski okrug", "SRB"),
    ("Braničevski okrug", "SRB"),
    ("Jablanički okrug", "SRB"),
    ("Južnobanatski okrug", "SRB"),
    ("Južnobački okrug", "SRB"),
    ("Kolubarski okrug", "SRB"),
    ("Kosovo-Metohija", "SRB"),
    ("Kosovski okrug", "SRB"),
    ("Kosovsko-Mitrovački okrug", "SRB"),
    ("Kosovsko-Pomoravski okrug", "SRB"),
    ("Mačvanski okrug", "SRB"),
    ("Moravički okrug", "SRB"),
    ("Nišavski okrug", "SRB"),
    ("Pećki okrug", "SRB"),
    ("Pirotski okrug", "SRB"),
    ("Podunavski okrug", "SRB"),
    ("Pomoravski okrug", "SRB"),
    ("Prizrenski okrug", "SRB"),
    ("Pčinjski okrug", "SRB"),
    ("Rasinski okrug", "SRB"),
    ("Raški okrug", "SRB"),
    ("Severnobanatski okrug", "SRB"),
    ("Severnobački okrug", "SRB"),
    ("Srednjebanatski okrug", "SRB"),
    ("Sremski okrug", "SRB"),
    ("Toplički okrug", "SRB"),
    ("Vojvodina", "SRB"),
    ("Zaječarski okrug", "SRB"),
    ("Zapadnobački okrug", "SRB"),
    ("Zlatiborski okrug", "SRB"),
    ("Šumadijski okrug", "SRB"),
    // South Sudan
    ("Central Equatoria", "SSD"),
    ("Eastern Equatoria", "SSD"),
    ("Jonglei", "SSD"),
    ("Lakes", "SSD"),
    ("Northern Bahr el Ghazal", "SSD"),
    ("Unity", "SSD"),
    ("Upper Nile", "SSD"),
    ("Warrap", "SSD"),
    ("Western Bahr el Ghazal", "SSD"),
    ("Western Equatoria", "SSD"),
    // Sao Tome and Principe
    ("Cantagalo", "STP"),
    ("Caué", "STP"),
    ("Lembá", "STP"),
    ("Lobata", "STP"),
    ("Mé-Zóchi", "STP"),
    ("Príncipe", "STP"),
    ("Água Grande", "STP"),
    // Suriname
    ("Brokopondo", "SUR"),
    ("Commewijne", "SUR"),
    ("Coronie", "SUR"),
    ("Marowijne", "SUR"),
    ("Nickerie", "SUR"),
    ("Para", "SUR"),
    ("Paramaribo", "SUR"),
    ("Saramacca", "SUR"),
    ("Sipaliwini", "SUR"),
    ("Wanica", "SUR"),
    // Slovakia
    ("Banskobystrický kraj", "SVK"),
    ("Bratislavský kraj", "SVK"),
    ("Košický kraj", "SVK"),
    ("Nitriansky kraj", "SVK"),
    ("Prešovský kraj", "SVK"),
    ("Trenčiansky kraj", "SVK"),
    ("Trnavský kraj", "SVK"),
    ("Žilinský kraj", "SVK"),
    // Slovenia
    ("Ajdovščina", "SVN"),
    ("Ankaran", "SVN"),
    ("Apače", "SVN"),
    ("Beltinci", "SVN"),
    ("Benedikt", "SVN"),
    ("Bistrica ob Sotli", "SVN"),
    ("Bled", "SVN"),
    ("Bloke", "SVN"),
    ("Bohinj", "SVN"),
    ("Borovnica", "SVN"),
    ("Bovec", "SVN"),
    ("Braslovče", "SVN"),
    ("Brda", "SVN"),
    ("Brezovica", "SVN"),
    ("Brežice", "SVN"),
    ("Cankova", "SVN"),
    ("Celje", "SVN"),
    ("Cerklje na Gorenjskem", "SVN"),
    ("Cerknica", "SVN"),
    ("Cerkno", "SVN"),
    ("Cerkvenjak", "SVN"),
    ("Cirkulane", "SVN"),
    ("Destrnik", "SVN"),
    ("Divača", "SVN"),
    ("Dobje", "SVN"),
    ("Dobrepolje", "SVN"),
    ("Dobrna", "SVN"),
    ("Dobrova-Polhov Gradec", "SVN"),
    ("Dobrovnik", "SVN"),
    ("Dol pri Ljubljani", "SVN"),
    ("Dolenjske Toplice", "SVN"),
    ("Domžale", "SVN"),
    ("Dornava", "SVN"),
    ("Dravograd", "SVN"),
    ("Duplek", "SVN"),
    ("Gorenja vas-Poljane", "SVN"),
    ("Gorišnica", "SVN"),
    ("Gorje", "SVN"),
    ("Gornja Radgona", "SVN"),
    ("Gornji Grad", "SVN"),
    ("Gornji Petrovci", "SVN"),
    ("Grad", "SVN"),
    ("Grosuplje", "SVN"),
    ("Hajdina", "SVN"),
    ("Hodoš", "SVN"),
    ("Horjul", "SVN"),
    ("Hoče-Slivnica", "SVN"),
    ("Hrastnik", "SVN"),
    ("Hrpelje-Kozina", "SVN"),
    ("Idrija", "SVN"),
    ("Ig", "SVN"),
    ("Ilirska Bistrica", "SVN"),
    ("Ivančna Gorica", "SVN"),
    ("Izola", "SVN"),
    ("Jesenice", "SVN"),
    ("Jezersko", "SVN"),
    ("Juršinci", "SVN"),
    ("Kamnik", "SVN"),
    ("Kanal", "SVN"),
    ("Kidričevo", "SVN"),
    ("Kobarid", "SVN"),
    ("Kobilje", "SVN"),
    ("Komen", "SVN"),
    ("Komenda", "SVN"),
    ("Koper", "SVN"),
    ("Kosanjevica na Krki", "SVN"),
    ("Kostel", "SVN"),
    ("Kozje", "SVN"),
    ("Kočevje", "SVN"),
    ("Kranj", "SVN"),
    ("Kranjska Gora", "SVN"),
    ("Križevci", "SVN"),
    ("Krško", "SVN"),
    ("Kungota", "SVN"),
    ("Kuzma", "SVN"),
    ("Laško", "SVN"),
    ("Lenart", "SVN"),
    ("Lendava", "SVN"),
    ("Litija", "SVN"),
    ("Ljubljana", "SVN"),
    ("Ljubno", "SVN"),
    ("Ljutomer", "SVN"),
    ("Log-Dragomer", "SVN"),
    ("Logatec", "SVN"),
    ("Lovrenc na Pohorju", "SVN"),
    ("Loška dolina", "SVN"),
    ("Loški Potok", "SVN"),
    ("Lukovica", "SVN"),
    ("Luče", "SVN"),
    ("Majšperk", "SVN"),
    ("Makole", "SVN"),
    ("Maribor", "SVN"),
    ("Markovci", "SVN"),
    ("Medvode", "SVN"),
    ("Mengeš", "SVN"),
    ("Metlika", "SVN"),
    ("Mežica", "SVN"),
    ("Miklavž na Dravskem polju", "SVN"),
    ("Miren-Kostanjevica", "SVN"),
    ("Mirna", "SVN"),
    ("Mirna Peč", "SVN"),
    ("Mislinja", "SVN"),
    ("Mokronog-Trebelno", "SVN"),
    ("Moravske Toplice", "SVN"),
    ("Moravče", "SVN"),
    ("Mozirje", "SVN"),
    ("Murska Sobota", "SVN"),
    ("Muta", "SVN"),
    ("Naklo", "SVN"),
    ("Nazarje", "SVN"),
    ("Nova Gorica", "SVN"),
    ("Novo Mesto", "SVN"),
    ("Odranci", "SVN"),
    ("Oplotnica", "SVN"),
    ("Ormož", "SVN"),
    ("Osilnica", "SVN"),
    ("Pesnica", "SVN"),
    ("Piran", "SVN"),
    ("Pivka", "SVN"),
    ("Podlehnik", "SVN"),
    ("Podvelka", "SVN"),
    ("Podčetrtek", "SVN"),
    ("Poljčane", "SVN"),
    ("Polzela", "SVN"),
    ("Postojna", "SVN"),
    ("Prebold", "SVN"),
    ("Preddvor", "SVN"),
    ("Prevalje", "SVN"),
    ("Ptuj", "SVN"),
    ("Puconci", "SVN"),
    ("Radenci", "SVN"),
    ("Radeče", "SVN"),
    ("Radlje ob Dravi", "SVN"),
    ("Radovljica", "SVN"),
    ("Ravne na Koroškem", "SVN"),
    ("Razkrižje", "SVN"),
    ("Rače-Fram", "SVN"),
    ("Renče-Vogrsko", "SVN"),
    ("Rečica ob Savinji", "SVN"),
    ("Ribnica", "SVN"),
    ("Ribnica na Pohorju", "SVN"),
    ("Rogatec", "SVN"),
    ("Rogaška Slatina", "SVN"),
    ("Rogašovci", "SVN"),
    ("Ruše", "SVN"),
    ("Selnica ob Dravi", "SVN"),
    ("Semič", "SVN"),
    ("Sevnica", "SVN"),
    ("Sežana", "SVN"),
    ("Slovenj Gradec", "SVN"),
    ("Slovenska Bistrica", "SVN"),
    ("Slovenske Konjice", "SVN"),
    ("Sodražica", "SVN"),
    ("Solčava", "SVN"),
    ("Središče ob Dravi", "SVN"),
    ("Starše", "SVN"),
    ("Straža", "SVN"),
    ("Sveta Ana", "SVN"),
    ("Sveta Trojica v Slovenskih goricah", "SVN"),
    ("Sveti Andraž v Slovenskih goricah", "SVN"),
    ("Sveti Jurij ob Ščavnici", "SVN"),
    ("Sveti Jurij v Slovenskih goricah", "SVN"),
    ("Sveti Tomaž", "SVN"),
    ("Tabor", "SVN"),
    ("Tišina", "SVN"),
    ("Tolmin", "SVN"),
    ("Trbovlje", "SVN"),
    ("Trebnje", "SVN"),
    ("Trnovska Vas", "SVN"),
    ("Trzin", "SVN"),
    ("Tržič", "SVN"),
    ("Turnišče", "SVN"),
    ("Velenje", "SVN"),
    ("Velika Polana", "SVN"),
    ("Velike Lašče", "SVN"),
    ("Veržej", "SVN"),
    ("Videm", "SVN"),
    ("Vipava", "SVN"),
    ("Vitanje", "SVN"),
    ("Vodice", "SVN"),
    ("Vojnik", "SVN"),
    ("Vransko", "SVN"),
    ("Vrhnika", "SVN"),
    ("Vuzenica", "SVN"),
    ("Zagorje ob Savi", "SVN"),
    ("Zavrč", "SVN"),
    ("Zreče", "SVN"),
    ("Črenšovci", "SVN"),
    ("Črna na Koroškem", "SVN"),
    ("Črnomelj", "SVN"),
    ("Šalovci", "SVN"),
    ("Šempeter-Vrtojba", "SVN"),
    ("Šentilj", "SVN"),
    ("Šentjernej", "SVN"),
    ("Šentjur", "SVN"),
    ("Šentrupert", "SVN"),
    ("Šenčur", "SVN"),
    ("Škocjan", "SVN"),
    ("Škofja Loka", "SVN"),
    ("Škofljica", "SVN"),
    ("Šmarje pri Jelšah", "SVN"),
    ("Šmarješke Toplice", "SVN"),
    ("Šmartno ob Paki", "SVN"),
    ("Šmartno pri Litiji", "SVN"),
    ("Šoštanj", "SVN"),
    ("Štore", "SVN"),
    ("Žalec", "SVN"),
    ("Železniki", "SVN"),
    ("Žetale", "SVN"),
    ("Žiri", "SVN"),
    ("Žirovnica", "SVN"),
    ("Žužemberk", "SVN"),
    // Sweden
    ("Blekinge län [SE-10]", "SWE"),
    ("Dalarnas län [SE-20]", "SWE"),
    ("Gotlands län [SE-09]", "SWE"),
    ("Gävleborgs län [SE-21]", "SWE"),
    ("Hallands län [SE-13]", "SWE"),
    ("Jämtlands län [SE-23]", "SWE"),
    ("Jönköpings län [SE-06]", "SWE"),
    ("Kalmar län [SE-08]", "SWE"),
    ("Kronobergs län [SE-07]", "SWE"),
    ("Norrbottens län [SE-25]", "SWE"),
    ("Skåne län [SE-12]", "SWE"),
    ("Stockholms län [SE-01]", "SWE"),
    ("Södermanlands län [SE-04]", "SWE"),
    ("Uppsala län [SE-03]", "SWE"),
    ("Värmlands län [SE-17]", "SWE"),
    ("Västerbottens län [SE-24]", "SWE"),
    ("Västernorrlands län [SE-22]", "SWE"),
    ("Västmanlands län [SE-19]", "SWE"),
    ("Västra Götalands län [SE-14]", "SWE"),
    ("Örebro län [SE-18]", "SWE"),
    ("Östergötlands län [SE-05]", "SWE"),
    // Eswatini
    ("Hhohho", "SWZ"),
    ("Lubombo", "SWZ"),
    ("Manzini", "SWZ"),
    ("Shiselweni", "SWZ"),
    // Seychelles
    ("Anse Boileau", "SYC"),
    ("Anse Etoile", "SYC"),
    ("Anse Royale", "SYC"),
    ("Anse aux Pins", "SYC"),
    ("Au Cap", "SYC"),
    ("Baie Lazare", "SYC"),
    ("Baie Sainte Anne", "SYC"),
    ("Beau Vallon", "SYC"),
    ("Bel Air", "SYC"),
    ("Bel Ombre", "SYC"),
    ("Cascade", "SYC"),
    ("English River", "SYC"),
    ("Glacis", "SYC"),
    ("Grand Anse Mahe", "SYC"),
    ("Grand Anse Praslin", "SYC"),
    ("Ile Perseverance I", "SYC"),
    ("Ile Perseverance II", "SYC"),
    ("La Digue", "SYC"),
    ("Les Mamelles", "SYC"),
    ("Mont Buxton", "SYC"),
    ("Mont Fleuri", "SYC"),
    ("Plaisance", "SYC"),
    ("Pointe Larue", "SYC"),
    ("Port Glaud", "SYC"),
    ("Roche Caiman", "SYC"),
    ("Saint Louis", "SYC"),
    ("Takamaka", "SYC"),
    // Syrian Arab Republic
    ("Al Lādhiqīyah", "SYR"),
    ("Al Qunayţirah", "SYR"),
    ("Al Ḩasakah", "SYR"),
    ("Ar Raqqah", "SYR"),
    ("As Suwaydā'", "SYR"),
    ("Dar'ā", "SYR"),
    ("Dayr az Zawr", "SYR"),
    ("Dimashq", "SYR"),
    ("Idlib", "SYR"),
    ("Rīf Dimashq", "SYR"),
    ("Ţarţūs", "SYR"),
    ("Ḩalab", "SYR"),
    ("Ḩamāh", "SYR"),
    ("Ḩimş", "SYR"),
    // Chad
    ("Al Baţḩā’", "TCD"),
    ("Al Buḩayrah", "TCD"),
    ("Bahr el Ghazal", "TCD"),
    ("Borkou", "TCD"),
    ("Chari-Baguirmi", "TCD"),
    ("Ennedi-Est", "TCD"),
    ("Ennedi-Ouest", "TCD"),
    ("Guéra", "TCD"),
    ("Hadjer Lamis", "TCD"),
    ("Kanem", "TCD"),
    ("Logone-Occidental", "TCD"),
    ("Logone-Oriental", "TCD"),
    ("Madīnat Injamīnā", "TCD"),
    ("Mandoul", "TCD"),
    ("Mayo-Kebbi-Est", "TCD"),
    ("Mayo-Kebbi-Ouest", "TCD"),
    ("Moyen-Chari", "TCD"),
    ("Ouaddaï", "TCD"),
    ("Salamat", "TCD"),
    ("Sila", "TCD"),
    ("Tandjilé", "TCD"),
    ("Tibastī", "TCD"),
    ("Wadi Fira", "TCD"),
    // Togo
    ("Centrale", "TGO"),
    ("Kara", "TGO"),
    ("Maritime (Région)", "TGO"),
    ("Plateaux", "TGO"),
    ("Savanes", "TGO"),
    // Thailand
    ("Amnat Charoen", "THA"),
    ("Ang Thong", "THA"),
    ("Bueng Kan", "THA"),
    ("Buri Ram", "THA"),
    ("Chachoengsao", "THA"),
    ("Chai Nat", "THA"),
    ("Chaiyaphum", "THA"),
    ("Chanthaburi", "THA"),
    ("Chiang Mai", "THA"),
    ("Chiang Rai", "THA"),
    ("Chon Buri", "THA"),
    ("Chumphon", "THA"),
    ("Kalasin", "THA"),
    ("Kamphaeng Phet", "THA"),
    ("Kanchanaburi", "THA"),
    ("Khon Kaen", "THA"),
    ("Krabi", "THA"),
    ("Krung Thep Maha Nakhon", "THA"),
    ("Lampang", "THA"),
    ("Lamphun", "THA"),
    ("Loei", "THA"),
    ("Lop Buri", "THA"),
    ("Mae Hong Son", "THA"),
    ("Maha Sarakham", "THA"),
    ("Mukdahan", "THA"),
    ("Nakhon Nayok", "THA"),
    ("Nakhon Pathom", "THA"),
    ("Nakhon Phanom", "THA"),
    ("Nakhon Ratchasima", "THA"),
    ("Nakhon Sawan", "THA"),
    ("Nakhon Si Thammarat", "THA"),
    ("Nan", "THA"),
    ("Narathiwat", "THA"),
    ("Nong Bua Lam Phu", "THA"),
    ("Nong Khai", "THA"),
    ("Nonthaburi", "THA"),
    ("Pathum Thani", "THA"),
    ("Pattani", "THA"),
    ("Phangnga", "THA"),
    ("Phatthalung", "THA"),
    ("Phatthaya", "THA"),
    ("Phayao", "THA"),
    ("Phetchabun", "THA"),
    ("Phetchaburi", "THA"),
    ("Phichit", "THA"),
    ("Phitsanulok", "THA"),
    ("Phra Nakhon Si Ayutthaya", "THA"),
    ("Phrae", "THA"),
    ("Phuket", "THA"),
    ("Prachin Buri", "THA"),
    ("Prachuap Khiri Khan", "THA"),
    ("Ranong", "THA"),
    ("Ratchaburi", "THA"),
    ("Rayong", "THA"),
    ("Roi Et", "THA"),
    ("Sa Kaeo", "THA"),
    ("Sakon Nakhon", "THA"),
    ("Samut Prakan", "THA"),
    ("Samut Sakhon", "THA"),
    ("Samut Songkhram", "THA"),
    ("Saraburi", "THA"),
    ("Satun", "THA"),
    ("Si Sa Ket", "THA"),
    ("Sing Buri", "THA"),
    ("Songkhla", "THA"),
    ("Sukhothai", "THA"),
    ("Suphan Buri", "THA"),
    ("Surat Thani", "THA"),
    ("Surin", "THA"),
    ("Tak", "THA"),
    ("Trang", "THA"),
    ("Trat", "THA"),
    ("Ubon Ratchathani", "THA"),
    ("Udon Thani", "THA"),
    ("Uthai Thani", "THA"),
    ("Uttaradit", "THA"),
    ("Yala", "THA"),
    ("Yasothon", "THA"),
    // Tajikistan
    ("Dushanbe", "TJK"),
    ("Khatlon", "TJK"),
    ("Kŭhistoni Badakhshon", "TJK"),
    ("Sughd", "TJK"),
    ("nohiyahoi tobei jumhurí", "TJK"),
    // Turkmenistan
    ("Ahal", "TKM"),
    ("Aşgabat", "TKM"),
    ("Balkan", "TKM"),
    ("Daşoguz", "TKM"),
    ("Lebap", "TKM"),
    ("Mary", "TKM"),
    // Timor-Leste
    ("Aileu", "TLS"),
    ("Ainaro", "TLS"),
    ("Baucau", "TLS"),
    ("Bobonaro", "TLS"),
    ("Cova Lima", "TLS"),
    ("Díli", "TLS"),
    ("Ermera", "TLS"),
    ("Lautein", "TLS"),
    ("Likisá", "TLS"),
    ("Manatuto", "TLS"),
    ("Manufahi", "TLS"),
    ("Oekusi-Ambenu", "TLS"),
    ("Vikeke", "TLS"),
    // Tonga
    ("'Eua", "TON"),
    ("Ha'apai", "TON"),
    ("Niuas", "TON"),
    ("Tongatapu", "TON"),
    ("Vava'u", "TON"),
    // Trinidad and Tobago
    ("Arima", "TTO"),
    ("Chaguanas", "TTO"),
    ("Couva-Tabaquite-Talparo", "TTO"),
    ("Diego Martin", "TTO"),
    ("Mayaro-Rio Claro", "TTO"),
    ("Penal-Debe", "TTO"),
    ("Point Fortin", "TTO"),
    ("Port of Spain", "TTO"),
    ("Princes Town", "TTO"),
    ("San Fernando", "TTO"),
    ("San Juan-Laventille", "TTO"),
    ("Sangre Grande", "TTO"),
    ("Siparia", "TTO"),
    ("Tobago", "TTO"),
    ("Tunapuna-Piarco", "TTO"),
    // Tunisia
    ("Ben Arous", "TUN"),
    ("Bizerte", "TUN"),
    ("Béja", "TUN"),
    ("Gabès", "TUN"),
    ("Gafsa", "TUN"),
    ("Jendouba", "TUN"),
    ("Kairouan", "TUN"),
    ("Kasserine", "TUN"),
    ("Kébili", "TUN"),
    ("L'Ariana", "TUN"),
    ("La Manouba", "TUN"),
    ("Le Kef", "TUN"),
    ("Mahdia", "TUN"),
    ("Monastir", "TUN"),
    ("Médenine", "TUN"),
    ("Nabeul", "TUN"),
    ("Sfax", "TUN"),
    ("Sidi Bouzid", "TUN"),
    ("Siliana", "TUN"),
    ("Sousse", "TUN"),
    ("Tataouine", "TUN"),
    ("Tozeur", "TUN"),
    ("Tunis", "TUN"),
    ("Zaghouan", "TUN"),
    // Türkiye
    ("Adana", "TUR"),
    ("Adıyaman", "TUR"),
    ("Afyonkarahisar", "TUR"),
    ("Aksaray", "TUR"),
    ("Amasya", "TUR"),
    ("Ankara", "TUR"),
    ("Antalya", "TUR"),
    ("Ardahan", "TUR"),
    ("Artvin", "TUR"),
    ("Aydın", "TUR"),
    ("Ağrı", "TUR"),
    ("Balıkesir", "TUR"),
    ("Bartın", "TUR"),
    ("Batman", "TUR"),
    ("Bayburt", "TUR"),
    ("Bilecik", "TUR"),
    ("Bingöl", "TUR"),
    ("Bitlis", "TUR"),
    ("Bolu", "TUR"),
    ("Burdur", "TUR"),
    ("Bursa", "TUR"),
    ("Denizli", "TUR"),
    ("Diyarbakır", "TUR"),
    ("Düzce", "TUR"),
    ("Edirne", "TUR"),
    ("Elazığ", "TUR"),
    ("Erzincan", "TUR"),
    ("Erzurum", "TUR"),
    ("Eskişehir", "TUR"),
    ("Gaziantep", "TUR"),
    ("Giresun", "TUR"),
    ("Gümüşhane", "TUR"),
    ("Hakkâri", "TUR"),
    ("Hatay", "TUR"),
    ("Isparta", "TUR"),
    ("Iğdır", "TUR"),
    ("Kahramanmaraş", "TUR"),
    ("Karabük", "TUR"),
    ("Karaman", "TUR"),
    ("Kars", "TUR"),
    ("Kastamonu", "TUR"),
    ("Kayseri", "TUR"),
    ("Kilis", "TUR"),
    ("Kocaeli", "TUR"),
    ("Konya", "TUR"),
    ("Kütahya", "TUR"),
    ("Kırklareli", "TUR"),
    ("Kırıkkale", "TUR"),
    ("Kırşehir", "TUR"),
    ("Malatya", "TUR"),
    ("Manisa", "TUR"),
    ("Mardin", "TUR"),
    ("Mersin", "TUR"),
    ("Muğla", "TUR"),
    ("Muş", "TUR"),
    ("Nevşehir", "TUR"),
    ("Niğde", "TUR"),
    ("Ordu", "TUR"),
    ("Osmaniye", "TUR"),
    ("Rize", "TUR"),
    ("Sakarya", "TUR"),
    ("Samsun", "TUR"),
    ("Siirt", "TUR"),
    ("Sinop", "TUR"),
    ("Sivas", "TUR"),
    ("Tekirdağ", "TUR"),
    ("Tokat", "TUR"),
    ("Trabzon", "TUR"),
    ("Tunceli", "TUR"),
    ("Uşak", "TUR"),
    ("Van", "TUR"),
    ("Yalova", "TUR"),
    ("Yozgat", "TUR"),
    ("Zonguldak", "TUR"),
    ("Çanakkale", "TUR"),
    ("Çankırı", "TUR"),
    ("Çorum", "TUR"),
    ("İstanbul", "TUR"),
    ("İzmir", "TUR"),
    ("Şanlıurfa", "TUR"),
    ("Şırnak", "TUR"),
    // Tuvalu
    ("Funafuti", "TUV"),
    ("Nanumaga", "TUV"),
    ("Nanumea", "TUV"),
    ("Niutao", "TUV"),
    ("Nui", "TUV"),
    ("Nukufetau", "TUV"),
    ("Nukulaelae", "TUV"),
    ("Vaitupu", "TUV"),
    // Taiwan, Province of China
    ("Changhua", "TWN"),
    ("Chiayi", "TWN"),
    ("Hsinchu", "TWN"),
    ("Hualien", "TWN"),
    ("Kaohsiung", "TWN"),
    ("Keelung", "TWN"),
    ("Kinmen", "TWN"),
    ("Lienchiang", "TWN"),
    ("Miaoli", "TWN"),
    ("Nantou", "TWN"),
    ("New Taipei", "TWN"),
    ("Penghu", "TWN"),
    ("Pingtung", "TWN"),
    ("Taichung", "TWN"),
    ("Tainan", "TWN"),
    ("Taipei", "TWN"),
    ("Taitung", "TWN"),
    ("Taoyuan", "TWN"),
    ("Yilan", "TWN"),
    ("Yunlin", "TWN"),
    // Tanzania, United Republic of
    ("Arusha", "TZA"),
    ("Coast", "TZA"),
    ("Dar es Salaam", "TZA"),
    ("Dodoma", "TZA"),
    ("Geita", "TZA"),
    ("Iringa", "TZA"),
    ("Kagera", "TZA"),
    ("Katavi", "TZA"),
    ("Kigoma", "TZA"),
    ("Kilimanjaro", "TZA"),
    ("Lindi", "TZA"),
    ("Manyara", "TZA"),
    ("Mara", "TZA"),
    ("Mbeya", "TZA"),
    ("Morogoro", "TZA"),
    ("Mtwara", "TZA"),
    ("Mwanza", "TZA"),
    ("Njombe", "TZA"),
    ("Pemba North", "TZA"),
    ("Pemba South", "TZA"),
    ("Rukwa", "TZA"),
    ("Ruvuma", "TZA"),
    ("Shinyanga", "TZA"),
    ("Simiyu", "TZA"),
    ("Singida", "TZA"),
    ("Songwe", "TZA"),
    ("Tabora", "TZA"),
    ("Tanga", "TZA"),
    ("Zanzibar North", "TZA"),
    ("Zanzibar South", "TZA"),
    ("Zanzibar West", "TZA"),
    // Uganda
    ("Abim", "UGA"),
    ("Adjumani", "UGA"),
    ("Agago", "UGA"),
    ("Alebtong", "UGA"),
    ("Amolatar", "UGA"),
    ("Amudat", "UGA"),
    ("Amuria", "UGA"),
    ("Amuru", "UGA"),
    ("Apac", "UGA"),
    ("Arua", "UGA"),
    ("Budaka", "UGA"),
    ("Bududa", "UGA"),
    ("Bugiri", "UGA"),
    ("Bugweri", "UGA"),
    ("Buhweju", "UGA"),
    ("Buikwe", "UGA"),
    ("Bukedea", "UGA"),
    ("Bukomansibi", "UGA"),
    ("Bukwo", "UGA"),
    ("Bulambuli", "UGA"),
    ("Buliisa", "UGA"),
    ("Bundibugyo", "UGA"),
    ("Bunyangabu", "UGA"),
    ("Bushenyi", "UGA"),
    ("Busia", "UGA"),
    ("Butaleja", "UGA"),
    ("Butambala", "UGA"),
    ("Butebo", "UGA"),
    ("Buvuma", "UGA"),
    ("Buyende", "UGA"),
    ("Central", "UGA"),
    ("Dokolo", "UGA"),
    ("Eastern", "UGA"),
    ("Gomba", "UGA"),
    ("Gulu", "UGA"),
    ("Hoima", "UGA"),
    ("Ibanda", "UGA"),
    ("Iganga", "UGA"),
    ("Isingiro", "UGA"),
    ("Jinja", "UGA"),
    ("Kaabong", "UGA"),
    ("Kabale", "UGA"),
    ("Kabarole", "UGA"),
    ("Kaberamaido", "UGA"),
    ("Kagadi", "UGA"),
    ("Kakumiro", "UGA"),
    ("Kalaki", "UGA"),
    ("Kalangala", "UGA"),
    ("Kaliro", "UGA"),
    ("Kalungu", "UGA"),
    ("Kampala", "UGA"),
    ("Kamuli", "UGA"),
    ("Kamwenge", "UGA"),
    ("Kanungu", "UGA"),
    ("Kapchorwa", "UGA"),
    ("Kapelebyong", "UGA"),
    ("Karenga", "UGA"),
    ("Kasanda", "UGA"),
    ("Kasese", "UGA"),
    ("Katakwi", "UGA"),
    ("Kayunga", "UGA"),
    ("Kazo", "UGA"),
    ("Kibaale", "UGA"),
    ("Kiboga", "UGA"),
    ("Kibuku", "UGA"),
    ("Kikuube", "UGA"),
    ("Kiruhura", "UGA"),
    ("Kiryandongo", "UGA"),
    ("Kisoro", "UGA"),
    ("Kitagwenda", "UGA"),
    ("Kitgum", "UGA"),
    ("Koboko", "UGA"),
    ("Kole", "UGA"),
    ("Kotido", "UGA"),
    ("Kumi", "UGA"),
    ("Kwania", "UGA"),
    ("Kween", "UGA"),
    ("Kyankwanzi", "UGA"),
    ("Kyegegwa", "UGA"),
    ("Kyenjojo", "UGA"),
    ("Kyotera", "UGA"),
    ("Lamwo", "UGA"),
    ("Lira", "UGA"),
    ("Luuka", "UGA"),
    ("Luwero", "UGA"),
    ("Lwengo", "UGA"),
    ("Lyantonde", "UGA"),
    ("Madi-Okollo", "UGA"),
    ("Manafwa", "UGA"),
    ("Maracha", "UGA"),
    ("Masaka", "UGA"),
    ("Masindi", "UGA"),
    ("Mayuge", "UGA"),
    ("Mbale", "UGA"),
    ("Mbarara", "UGA"),
    ("Mitooma", "UGA"),
    ("Mityana", "UGA"),
    ("Moroto", "UGA"),
    ("Moyo", "UGA"),
    ("Mpigi", "UGA"),
    ("Mubende", "UGA"),
    ("Mukono", "UGA"),
    ("Nabilatuk", "UGA"),
    ("Nakapiripirit", "UGA"),
    ("Nakaseke", "UGA"),
    ("Nakasongola", "UGA"),
    ("Namayingo", "UGA"),
    ("Namisindwa", "UGA"),
    ("Namutumba", "UGA"),
    ("Napak", "UGA"),
    ("Nebbi", "UGA"),
    ("Ngora", "UGA"),
    ("Northern", "UGA"),
    ("Ntoroko", "UGA"),
    ("Ntungamo", "UGA"),
    ("Nwoya", "UGA"),
    ("Obongi", "UGA"),
    ("Omoro", "UGA"),
    ("Otuke", "UGA"),
    ("Oyam", "UGA"),
    ("Pader", "UGA"),
    ("Pakwach", "UGA"),
    ("Pallisa", "UGA"),
    ("Rakai", "UGA"),
    ("Rubanda", "UGA"),
    ("Rubirizi", "UGA"),
    ("Rukiga", "UGA"),
    ("Rukungiri", "UGA"),
    ("Rwampara", "UGA"),
    ("Sembabule", "UGA"),
    ("Serere", "UGA"),
    ("Sheema", "UGA"),
    ("Sironko", "UGA"),
    ("Soroti", "UGA"),
    ("Tororo", "UGA"),
    ("Wakiso", "UGA"),
    ("Western", "UGA"),
    ("Yumbe", "UGA"),
    ("Zombo", "UGA"),
    // Ukraine
    ("Avtonomna Respublika Krym", "UKR"),
    ("Cherkaska oblast", "UKR"),
    ("Chernihivska oblast", "UKR"),
    ("Chernivetska oblast", "UKR"),
    ("Dnipropetrovska oblast", "UKR"),
    ("Donetska oblast", "UKR"),
    ("Ivano-Frankivska oblast", "UKR"),
    ("Kharkivska oblast", "UKR"),
    ("Khersonska oblast", "UKR"),
    ("Khmelnytska oblast", "UKR"),
    ("Kirovohradska oblast", "UKR"),
    ("Kyiv", "UKR"),
    ("Kyivska oblast", "UKR"),
    ("Luhanska oblast", "UKR"),
    ("Lvivska oblast", "UKR"),
    ("Mykolaivska oblast", "UKR"),
    ("Odeska oblast", "UKR"),
    ("Poltavska oblast", "UKR"),
    ("Rivnenska oblast", "UKR"),
    ("Sevastopol", "UKR"),
    ("Sumska oblast", "UKR"),
    ("Ternopilska oblast", "UKR"),
    ("Vinnytska oblast", "UKR"),
    ("Volynska oblast", "UKR"),
    ("Zakarpatska oblast", "UKR"),
    ("Zaporizka oblast", "UKR"),
    ("Zhytomyrska oblast", "UKR"),
    // United States Minor Outlying Islands
    ("Baker Island", "UMI"),
    ("Howland Island", "UMI"),
    ("Jarvis Island", "UMI"),
    ("Johnston Atoll", "UMI"),
    ("Kingman Reef", "UMI"),
    ("Midway Islands", "UMI"),
    ("Navassa Island", "UMI"),
    ("Palmyra Atoll", "UMI"),
    ("Wake Island", "UMI"),
    // Uruguay
    ("Artigas", "URY"),
    ("Canelones", "URY"),
    ("Cerro Largo", "URY"),
    ("Colonia", "URY"),
    ("Durazno", "URY"),
    ("Flores", "URY"),
    ("Florida", "URY"),
    ("Lavalleja", "URY"),
    ("Maldonado", "URY"),
    ("Montevideo", "URY"),
    ("Paysandú", "URY"),
    ("Rivera", "URY"),
    ("Rocha", "URY"),
    ("Río Negro", "URY"),
    ("Salto", "URY"),
    ("San José", "URY"),
    ("Soriano", "URY"),
    ("Tacuarembó", "URY"),
    ("Treinta y Tres", "URY"),
    // United States
    ("Alabama", "USA"),
    ("Alaska", "USA"),
    ("American Samoa", "USA"),
    ("Arizona", "USA"),
    ("Arkansas", "USA"),
    ("California", "USA"),
    ("Colorado", "USA"),
    ("Connecticut", "USA"),
    ("Delaware", "USA"),
    ("District of Columbia", "USA"),
    ("Florida", "USA"),
    ("Georgia", "USA"),
    ("Guam", "USA"),
    ("Hawaii", "USA"),
    ("Idaho", "USA"),
    ("Illinois", "USA"),
    ("Indiana", "USA"),
    ("Iowa", "USA"),
    ("Kansas", "USA"),
    ("Kentucky", "USA"),
    ("Louisiana", "USA"),
    ("Maine", "USA"),
    ("Maryland", "USA"),
    ("Massachusetts", "USA"),
    ("Michigan", "USA"),
    ("Minnesota", "USA"),
    ("Mississippi", "USA"),
    ("Missouri", "USA"),
    ("Montana", "USA"),
    ("Nebraska", "USA"),
    ("Nevada", "USA"),
    ("New Hampshire", "USA"),
    ("New Jersey", "USA"),
    ("New Mexico", "USA"),
    ("New York", "USA"),
    ("North Carolina", "USA"),
    ("North Dakota", "USA"),
    ("Northern Mariana Islands", "USA"),
    ("Ohio", "USA"),
    ("Oklahoma", "USA"),
    ("Oregon", "USA"),
    ("Pennsylvania", "USA"),
    ("Puerto Rico", "USA"),
    ("Rhode Island", "USA"),
    ("South Carolina", "USA"),
    ("South Dakota", "USA"),
    ("Tennessee", "USA"),
    ("Texas", "USA"),
    ("United States Minor Outlying Islands", "USA"),
    ("Utah", "USA"),
    ("Vermont", "USA"),
    ("Virginia", "USA"),
    ("Washington", "USA"),
    ("West Virginia", "USA"),
    ("Wisconsin", "USA"),
    ("Wyoming", "USA"),
    // Uzbekistan
    ("Andijon", "UZB"),
    ("Buxoro", "UZB"),
    ("Farg‘ona", "UZB"),
    ("Jizzax", "UZB"),
    ("Namangan", "UZB"),
    ("Navoiy", "UZB"),
    ("Qashqadaryo", "UZB"),
    ("Qoraqalpog‘iston Respublikasi", "UZB"),
    ("Samarqand", "UZB"),
    ("Sirdaryo", "UZB"),
    ("Surxondaryo", "UZB"),
    ("Toshkent", "UZB"),
    ("Xorazm", "UZB"),
    // Saint Vincent and the Grenadines
    ("Charlotte", "VCT"),
    ("Grenadines", "VCT"),
    ("Saint Andrew", "VCT"),
    ("Saint David", "VCT"),
    ("Saint George", "VCT"),
    ("Saint Patrick", "VCT"),
    // Venezuela, Bolivarian Republic of
    ("Amazonas", "VEN"),
    ("Anzoátegui", "VEN"),
    ("Apure", "VEN"),
    ("Aragua", "VEN"),
    ("Barinas", "VEN"),
    ("Bolívar", "VEN"),
    ("Carabobo", "VEN"),
    ("Cojedes", "VEN"),
    ("Delta Amacuro", "VEN"),
    ("Dependencias Federales", "VEN"),
    ("Distrito Capital", "VEN"),
    ("Falcón", "VEN"),
    ("Guárico", "VEN"),
    ("La Guaira", "VEN"),
    ("Lara", "VEN"),
    ("Miranda", "VEN"),
    ("Monagas", "VEN"),
    ("Mérida", "VEN"),
    ("Nueva Esparta", "VEN"),
    ("Portuguesa", "VEN"),
    ("Sucre", "VEN"),
    ("Trujillo", "VEN"),
    ("Táchira", "VEN"),
    ("Yaracuy", "VEN"),
    ("Zulia", "VEN"),
    // Viet Nam
    ("An Giang", "VNM"),
    ("Bà Rịa - Vũng Tàu", "VNM"),
    ("Bình Dương", "VNM"),
    ("Bình Phước", "VNM"),
    ("Bình Thuận", "VNM"),
    ("Bình Định", "VNM"),
    ("Bạc Liêu", "VNM"),
    ("Bắc Giang", "VNM"),
    ("Bắc Kạn", "VNM"),
    ("Bắc Ninh", "VNM"),
    ("Bến Tre", "VNM"),
    ("Cao Bằng", "VNM"),
    ("Cà Mau", "VNM"),
    ("Cần Thơ", "VNM"),
    ("Gia Lai", "VNM"),
    ("Hà Giang", "VNM"),
    ("Hà Nam", "VNM"),
    ("Hà Nội", "VNM"),
    ("Hà Tĩnh", "VNM"),
    ("Hòa Bình", "VNM"),
    ("Hưng Yên", "VNM"),
    ("Hải Dương", "VNM"),
    ("Hải Phòng", "VNM"),
    ("Hậu Giang", "VNM"),
    ("Hồ Chí Minh", "VNM"),
    ("Khánh Hòa", "VNM"),
    ("Kiến Giang", "VNM"),
    ("Kon Tum", "VNM"),
    ("Lai Châu", "VNM"),
    ("Long An", "VNM"),
    ("Lào Cai", "VNM"),
    ("Lâm Đồng", "VNM"),
    ("Lạng Sơn", "VNM"),
    ("Nam Định", "VNM"),
    ("Nghệ An", "VNM"),
    ("Ninh Bình", "VNM"),
    ("Ninh Thuận", "VNM"),
    ("Phú Thọ", "VNM"),
    ("Phú Yên", "VNM"),
    ("Quảng Bình", "VNM"),
    ("Quảng Nam", "VNM"),
    ("Quảng Ngãi", "VNM"),
    ("Quảng Ninh", "VNM"),
    ("Quảng Trị", "VNM"),
    ("Sóc Trăng", "VNM"),
    ("Sơn La", "VNM"),
    ("Thanh Hóa", "VNM"),
    ("Thái Bình", "VNM"),
    ("Thái Nguyên", "VNM"),
    ("Thừa Thiên-Huế", "VNM"),
    ("Tiền Giang", "VNM"),
    ("Trà Vinh", "VNM"),
    ("Tuyên Quang", "VNM"),
    ("Tây Ninh", "VNM"),
    ("Vĩnh Long", "VNM"),
    ("Vĩnh Phúc", "VNM"),
    ("Yên Bái", "VNM"),
    ("Điện Biên", "VNM"),
    ("Đà Nẵng", "VNM"),
    ("Đắk Lắk", "VNM"),
    ("Đắk Nông", "VNM"),
    ("Đồng Nai", "VNM"),
    ("Đồng Tháp", "VNM"),
    // Vanuatu
    ("Malampa", "VUT"),
    ("Pénama", "VUT"),
    ("Sanma", "VUT"),
    ("Shéfa", "VUT"),
    ("Taféa", "VUT"),
    ("Torba", "VUT"),
    // Wallis and Futuna
    ("Alo", "WLF"),
    ("Sigave", "WLF"),
    ("Uvea", "WLF"),
    // Samoa
    ("A'ana", "WSM"),
    ("Aiga-i-le-Tai", "WSM"),
    ("Atua", "WSM"),
    ("Fa'asaleleaga", "WSM"),
    ("Gaga'emauga", "WSM"),
    ("Gagaifomauga", "WSM"),
    ("Palauli", "WSM"),
    ("Satupa'itea", "WSM"),
    ("Tuamasaga", "WSM"),
    ("Va'a-o-Fonoti", "WSM"),
    ("Vaisigano", "WSM"),
    // Yemen
    ("Abyan", "YEM"),
    ("Al Bayḑā’", "YEM"),
    ("Al Jawf", "YEM"),
    ("Al Mahrah", "YEM"),
    ("Al Maḩwīt", "YEM"),
    ("Al Ḩudaydah", "YEM"),
    ("Amānat al ‘Āşimah [city]", "YEM"),
    ("Arkhabīl Suquţrá", "YEM"),
    ("Aḑ Ḑāli‘", "YEM"),
    ("Dhamār", "YEM"),
    ("Ibb", "YEM"),
    ("Laḩij", "YEM"),
    ("Ma’rib", "YEM"),
    ("Raymah", "YEM"),
    ("Shabwah", "YEM"),
    ("Tāʻizz", "YEM"),
    ("Şanʻā’", "YEM"),
    ("Şāʻdah", "YEM"),
    ("Ḩajjah", "YEM"),
    ("Ḩaḑramawt", "YEM"),
    ("‘Adan", "YEM"),
    ("‘Amrān", "YEM"),
    // South Africa
    ("Eastern Cape", "ZAF"),
    ("Free State", "ZAF"),
    ("Gauteng", "ZAF"),
    ("Kwazulu-Natal", "ZAF"),
    ("Limpopo", "ZAF"),
    ("Mpumalanga", "ZAF"),
    ("North-West", "ZAF"),
    ("Northern Cape", "ZAF"),
    ("Western Cape", "ZAF"),
    // Zambia
    ("Central", "ZMB"),
    ("Copperbelt", "ZMB"),
    ("Eastern", "ZMB"),
    ("Luapula", "ZMB"),
    ("Lusaka", "ZMB"),
    ("Muchinga", "ZMB"),
    ("North-Western", "ZMB"),
    ("Northern", "ZMB"),
    ("Southern", "ZMB"),
    ("Western", "ZMB"),
    // Zimbabwe
    ("Bulawayo", "ZWE"),
    ("Harare", "ZWE"),
    ("Manicaland", "ZWE"),
    ("Mashonaland Central", "ZWE"),
    ("Mashonaland East", "ZWE"),
    ("Mashonaland West", "ZWE"),
    ("Masvingo", "ZWE"),
    ("Matabeleland North", "ZWE"),
    ("Matabeleland South", "ZWE"),
    ("Midlands", "ZWE"),
];
